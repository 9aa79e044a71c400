use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use feed::Board;
use serde::Deserialize;

use crate::{
    error::AppError,
    state::AppState,
    views::{EmergencyCard, MapView, StatusView},
};

#[derive(Deserialize)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    fn apply(&self, board: &mut Board) {
        if let Some(id) = &self.selected {
            board.select(id);
        }
    }
}

pub async fn emergencies_handler(
    State(state): State<Arc<AppState>>,
    Query(selection): Query<Selection>,
) -> Result<Json<Vec<EmergencyCard>>, AppError> {
    let mut board = state.board().await?;
    selection.apply(&mut board);

    let cards = board
        .sorted()
        .iter()
        .map(|emergency| EmergencyCard::new(emergency, board.is_selected(&emergency.id)))
        .collect();

    Ok(Json(cards))
}

pub async fn emergency_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EmergencyCard>, AppError> {
    let board = state.board().await?;

    board
        .sorted()
        .iter()
        .find(|emergency| emergency.id == id)
        .map(|emergency| Json(EmergencyCard::new(emergency, false)))
        .ok_or(AppError::NotFound(id))
}

pub async fn map_handler(
    State(state): State<Arc<AppState>>,
    Query(selection): Query<Selection>,
) -> Result<Json<MapView>, AppError> {
    let mut board = state.board().await?;
    selection.apply(&mut board);

    Ok(Json(MapView::new(board.selected())))
}

pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusView> {
    Json(StatusView::from(&state.feed.state().await))
}
