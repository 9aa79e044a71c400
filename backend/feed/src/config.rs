use std::{env, fs::read_to_string};

use thiserror::Error;
use tracing::{info, warn};

pub const SUBDOMAIN_KEY: &str = "NHOST_SUBDOMAIN";
pub const REGION_KEY: &str = "NHOST_REGION";
pub const URL_KEY: &str = "NHOST_URL";
pub const ADMIN_SECRET_KEY: &str = "NHOST_ADMIN_SECRET";

const SECRETS_DIR: &str = "/run/secrets";

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Environment misconfigured, missing: {}", .missing.join(", "))]
pub struct ConfigError {
    pub missing: Vec<String>,
}

#[derive(Clone)]
pub struct NhostConfig {
    pub subdomain: String,
    pub region: String,
    pub url: String,
    pub admin_secret: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub auth: String,
    pub graphql: String,
    pub storage: String,
    pub functions: String,
}

impl NhostConfig {
    /// Reads the Nhost connection settings from the process environment.
    ///
    /// The admin secret may also come from `/run/secrets/NHOST_ADMIN_SECRET`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::from_lookup(var)?;

        if config.admin_secret.is_none() {
            config.admin_secret = read_secret(ADMIN_SECRET_KEY);
        }

        Ok(config)
    }

    /// Builds the config from any key lookup, reporting every missing key at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut require = |key: &str| match non_empty(lookup(key)) {
            Some(value) => value,
            None => {
                missing.push(key.to_string());
                String::new()
            }
        };

        let subdomain = require(SUBDOMAIN_KEY);
        let region = require(REGION_KEY);
        let url = require(URL_KEY);

        if !missing.is_empty() {
            return Err(ConfigError { missing });
        }

        Ok(Self {
            subdomain,
            region,
            url,
            admin_secret: non_empty(lookup(ADMIN_SECRET_KEY)),
        })
    }

    pub fn endpoints(&self) -> Endpoints {
        let base = self.url.trim_end_matches('/');

        Endpoints {
            auth: format!("{base}/v1/auth"),
            graphql: format!("{base}/v1/graphql"),
            storage: format!("{base}/v1/storage"),
            functions: format!("{base}/v1/functions"),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .map_err(|_| {
            warn!("Environment variable {key} not found");
        })
        .ok()
}

fn read_secret(secret_name: &str) -> Option<String> {
    let path = format!("{SECRETS_DIR}/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            info!("No {secret_name} secret file, continuing without it: {e}");
        })
        .ok()
        .filter(|s| !s.is_empty())
}
