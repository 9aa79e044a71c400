use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::{
    config::{Endpoints, NhostConfig},
    error::FeedError,
    models::GraphqlResponse,
};

pub const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

/// Transport for the Nhost sub-services. Only the GraphQL endpoint is called;
/// the others are kept so callers can hand them to a front end.
pub struct NhostClient {
    http: Client,
    endpoints: Endpoints,
    admin_secret: Option<String>,
}

impl NhostClient {
    pub fn new(config: &NhostConfig) -> Self {
        Self::with_http(Client::new(), config)
    }

    pub fn with_http(http: Client, config: &NhostConfig) -> Self {
        Self {
            http,
            endpoints: config.endpoints(),
            admin_secret: config.admin_secret.clone(),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Sends one GraphQL operation and decodes the standard envelope.
    ///
    /// Non-2xx responses are still decoded, since Hasura reports query errors
    /// in the body.
    pub async fn request<T>(
        &self,
        operation_name: &str,
        query: &str,
    ) -> Result<GraphqlResponse<T>, FeedError>
    where
        T: DeserializeOwned,
    {
        let payload = json!({
            "operationName": operation_name,
            "query": query,
        });

        let mut request = self.http.post(&self.endpoints.graphql).json(&payload);
        if let Some(secret) = &self.admin_secret {
            request = request.header(ADMIN_SECRET_HEADER, secret);
        }

        let res = request.send().await?;
        debug!("{operation_name} status: {}", res.status());

        let body = res.text().await?;

        Ok(serde_json::from_str(&body)?)
    }
}
