use std::{fmt::Display, future::Future, sync::Arc};

use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::{
    client::NhostClient,
    coalesce::RequestCoalescer,
    error::FeedError,
    models::{EmergenciesData, Emergency, GET_EMERGENCIES, GraphqlResponse, OPERATION_NAME},
};

pub const EMERGENCIES_KEY: &str = "emergencies";
pub const DEFAULT_RETRIES: u32 = 1;

pub type Snapshot = Arc<Vec<Emergency>>;

#[derive(Debug, Clone)]
pub enum FetchState {
    Loading,
    Failed(String),
    Ready(Snapshot),
}

impl FetchState {
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            FetchState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Runs the emergencies query once and validates what comes back.
///
/// Records keep the order the backend returned them in.
pub async fn fetch_emergencies(client: &NhostClient) -> Result<Vec<Emergency>, FeedError> {
    let response: GraphqlResponse<EmergenciesData> =
        client.request(OPERATION_NAME, GET_EMERGENCIES).await?;

    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        error!("GraphQL errors: {errors:?}");
        return Err(FeedError::Graphql(errors));
    }

    let records = response
        .data
        .and_then(|data| data.emergencies)
        .ok_or(FeedError::MissingData)?;

    records.into_iter().map(Emergency::try_from).collect()
}

/// Calls `attempt` once, then up to `retries` more times while it keeps failing.
pub async fn with_retry<T, E, F, Fut>(retries: u32, mut attempt: F) -> Result<T, E>
where
    E: Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut failures = 0;

    loop {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(e) if failures < retries => {
                failures += 1;
                warn!("Attempt {failures} failed, retrying: {e}");
            }
            Err(e) => return Err(e),
        }
    }
}

/// Loading/error/success view over the emergencies query.
///
/// Nothing refreshes in the background; data only changes when a caller
/// runs [`EmergencyFeed::load`].
pub struct EmergencyFeed {
    client: Arc<NhostClient>,
    retries: u32,
    coalescer: RequestCoalescer<FetchState>,
    state: Arc<RwLock<FetchState>>,
}

impl EmergencyFeed {
    pub fn new(client: Arc<NhostClient>) -> Self {
        Self {
            client,
            retries: DEFAULT_RETRIES,
            coalescer: RequestCoalescer::new(),
            state: Arc::new(RwLock::new(FetchState::Loading)),
        }
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub async fn state(&self) -> FetchState {
        self.state.read().await.clone()
    }

    /// Fetches the full record set, joining a fetch already in flight.
    ///
    /// A previous `Ready` snapshot stays visible until this one settles. The
    /// fetch records its outcome itself, so the state settles even when every
    /// caller stops waiting.
    pub async fn load(&self) -> FetchState {
        {
            let mut state = self.state.write().await;
            if !matches!(*state, FetchState::Ready(_)) {
                *state = FetchState::Loading;
            }
        }

        let client = self.client.clone();
        let state = self.state.clone();
        let retries = self.retries;

        let settled = self
            .coalescer
            .run(EMERGENCIES_KEY, move || async move {
                let next = match with_retry(retries, || fetch_emergencies(&client)).await {
                    Ok(records) => {
                        info!("Loaded {} emergencies", records.len());
                        FetchState::Ready(Arc::new(records))
                    }
                    Err(e) => {
                        error!("Query execution error: {e}");
                        FetchState::Failed(e.to_string())
                    }
                };

                *state.write().await = next.clone();
                next
            })
            .await;

        match settled {
            Some(next) => next,
            None => {
                let next = FetchState::Failed(FeedError::Unknown.to_string());
                *self.state.write().await = next.clone();
                next
            }
        }
    }
}
