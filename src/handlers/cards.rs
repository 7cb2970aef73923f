use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, NotFound, Result};
use crate::models::{CardResponse, CreateCard, MoveCard, UpdateCard};
use crate::state::AppState;

pub async fn create_card(
    State(state): State<AppState>,
    Path((board_id, column_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<CreateCard>,
) -> Result<Json<CardResponse>> {
    if input.title.trim().is_empty() {
        return Err(AppError::Validation("Card title is required".to_string()));
    }

    let mut store = state.store.lock().await;
    let card = store.create_card(board_id, column_id, input)?;

    Ok(Json(card.into_response(store.tags(), Utc::now())))
}

pub async fn get_card(
    State(state): State<AppState>,
    Path((board_id, card_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<CardResponse>> {
    let store = state.store.lock().await;
    let card = store
        .card(board_id, card_id)
        .cloned()
        .ok_or(NotFound::Card(card_id))?;

    Ok(Json(card.into_response(store.tags(), Utc::now())))
}

pub async fn update_card(
    State(state): State<AppState>,
    Path((board_id, card_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<UpdateCard>,
) -> Result<Json<CardResponse>> {
    if input.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(AppError::Validation("Card title cannot be empty".to_string()));
    }

    let mut store = state.store.lock().await;
    let card = store.update_card(board_id, card_id, input)?;

    Ok(Json(card.into_response(store.tags(), Utc::now())))
}

pub async fn delete_card(
    State(state): State<AppState>,
    Path((board_id, card_id)): Path<(Uuid, Uuid)>,
) -> Result<()> {
    state.store.lock().await.delete_card(board_id, card_id)?;
    Ok(())
}

pub async fn move_card(
    State(state): State<AppState>,
    Path((board_id, card_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<MoveCard>,
) -> Result<Json<CardResponse>> {
    let mut store = state.store.lock().await;
    let card = store.move_card(board_id, card_id, &input)?;

    Ok(Json(card.into_response(store.tags(), Utc::now())))
}
