use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, NotFound, Result};
use crate::models::{BoardResponse, ColumnResponse, CreateColumn, MoveColumn, UpdateColumn};
use crate::state::AppState;

pub async fn create_column(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
    Json(input): Json<CreateColumn>,
) -> Result<Json<ColumnResponse>> {
    if input.title.trim().is_empty() {
        return Err(AppError::Validation("Column title is required".to_string()));
    }

    let mut store = state.store.lock().await;
    let column = store.create_column(board_id, input)?;

    Ok(Json(column.into_response(store.tags(), Utc::now())))
}

pub async fn update_column(
    State(state): State<AppState>,
    Path((board_id, column_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<UpdateColumn>,
) -> Result<Json<ColumnResponse>> {
    if input.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(AppError::Validation("Column title cannot be empty".to_string()));
    }

    let mut store = state.store.lock().await;
    let column = store.update_column(board_id, column_id, input)?;

    Ok(Json(column.into_response(store.tags(), Utc::now())))
}

/// Deletes the column together with its cards.
pub async fn delete_column(
    State(state): State<AppState>,
    Path((board_id, column_id)): Path<(Uuid, Uuid)>,
) -> Result<()> {
    state
        .store
        .lock()
        .await
        .delete_column(board_id, column_id)?;
    Ok(())
}

/// Indices refer to display order. Responds with the whole board, since
/// every column's `order` may have changed.
pub async fn move_column(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
    Json(input): Json<MoveColumn>,
) -> Result<Json<BoardResponse>> {
    let mut store = state.store.lock().await;
    store.move_column(board_id, input.source_index, input.target_index)?;
    let board = store.board(board_id).ok_or(NotFound::Board(board_id))?;

    Ok(Json(BoardResponse::new(board, store.tags(), Utc::now())))
}
