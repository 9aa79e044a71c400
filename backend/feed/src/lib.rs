//! # Emergency Feed
//!
//! Read-only client for the crowd-sourced emergency reports stored in Nhost.
//!
//! ## Flow
//!
//! - [`NhostConfig::from_env`] validates the connection settings once at startup
//! - [`NhostClient`] posts the fixed `GetEmergencies` query to Hasura
//! - [`EmergencyFeed::load`] normalizes every failure into one message, retries once,
//!   and joins concurrent loads onto a single request
//! - [`Board`] sorts the snapshot by urgency and tracks the map selection
//! - [`display`] turns types and urgency into colors, icons and labels
//!
//! ## Failure messages
//!
//! - GraphQL errors: their messages joined with `", "`
//! - No `emergencies` field: `No data received from server`
//! - Anything without an error of its own: `Failed to fetch emergencies`

pub mod client;
pub mod coalesce;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod remote;
pub mod selection;

pub use client::NhostClient;
pub use config::{ConfigError, Endpoints, NhostConfig};
pub use error::FeedError;
pub use models::{Emergency, EmergencyStatus, EmergencyType};
pub use remote::{EmergencyFeed, FetchState, Snapshot, fetch_emergencies};
pub use selection::{Board, sort_by_urgency};
