use std::{collections::HashMap, future::Future, sync::Arc};

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::Mutex;
use tracing::error;

type Pending<T> = Shared<BoxFuture<'static, Option<T>>>;

/// Joins concurrent requests for the same key onto one pending future.
///
/// Each request runs in its own task, which clears its key when it finishes,
/// so callers that give up waiting never leave a stale entry behind.
pub struct RequestCoalescer<T>
where
    T: Clone + Send + Sync + 'static,
{
    inflight: Arc<Mutex<HashMap<String, Pending<T>>>>,
}

impl<T> RequestCoalescer<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            inflight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Runs `start` unless a request for `key` is already pending, in which
    /// case the caller waits on that one instead.
    ///
    /// `None` means the request task panicked or was aborted.
    pub async fn run<F, Fut>(&self, key: &str, start: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T> + Send + 'static,
    {
        let pending = {
            let mut inflight = self.inflight.lock().await;

            match inflight.get(key) {
                Some(pending) => pending.clone(),
                None => {
                    let pending = self.spawn(key, start());
                    inflight.insert(key.to_string(), pending.clone());
                    pending
                }
            }
        };

        pending.await
    }

    pub async fn is_pending(&self, key: &str) -> bool {
        self.inflight.lock().await.contains_key(key)
    }

    // called with the map locked, so the task's removal always lands after the insert
    fn spawn<Fut>(&self, key: &str, request: Fut) -> Pending<T>
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        let inflight = self.inflight.clone();
        let key = key.to_string();

        let task = tokio::spawn(async move {
            let output = request.await;
            inflight.lock().await.remove(&key);
            output
        });

        task.map(|joined| {
            joined
                .map_err(|e| error!("Request task did not finish: {e}"))
                .ok()
        })
        .boxed()
        .shared()
    }
}

impl<T> Default for RequestCoalescer<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
