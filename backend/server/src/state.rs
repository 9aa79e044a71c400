use std::sync::Arc;

use feed::{Board, EmergencyFeed, NhostClient};

use super::{config::Config, error::AppError};

pub struct AppState {
    pub config: Config,
    pub feed: EmergencyFeed,
}

impl AppState {
    pub fn new(config: Config, client: Arc<NhostClient>) -> Arc<Self> {
        Arc::new(Self {
            config,
            feed: EmergencyFeed::new(client),
        })
    }

    /// Loads the feed into a fresh board, or the normalized failure message.
    pub async fn board(&self) -> Result<Board, AppError> {
        let fetched = self.feed.load().await;

        if let Some(message) = fetched.error() {
            return Err(AppError::Fetch(message.to_string()));
        }

        let mut board = Board::new();
        board.sync(&fetched);

        Ok(board)
    }
}
