use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, NotFound, Result};
use crate::models::{BoardResponse, CreateBoard, SetCurrentBoard, UpdateBoard};
use crate::services::BoardStats;
use crate::state::AppState;

pub async fn create_board(
    State(state): State<AppState>,
    Json(input): Json<CreateBoard>,
) -> Result<Json<BoardResponse>> {
    if input.title.trim().is_empty() {
        return Err(AppError::Validation("Board title is required".to_string()));
    }

    let mut store = state.store.lock().await;
    let board = store.create_board(input.title);

    Ok(Json(BoardResponse::new(&board, store.tags(), Utc::now())))
}

pub async fn list_boards(State(state): State<AppState>) -> Result<Json<Vec<BoardResponse>>> {
    let store = state.store.lock().await;
    let now = Utc::now();

    Ok(Json(
        store
            .boards()
            .iter()
            .map(|board| BoardResponse::new(board, store.tags(), now))
            .collect(),
    ))
}

pub async fn get_board(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
) -> Result<Json<BoardResponse>> {
    let store = state.store.lock().await;
    let board = store.board(board_id).ok_or(NotFound::Board(board_id))?;

    Ok(Json(BoardResponse::new(board, store.tags(), Utc::now())))
}

pub async fn update_board(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
    Json(input): Json<UpdateBoard>,
) -> Result<Json<BoardResponse>> {
    if input.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(AppError::Validation("Board title cannot be empty".to_string()));
    }

    let mut store = state.store.lock().await;
    let board = store.update_board(board_id, input)?;

    Ok(Json(BoardResponse::new(&board, store.tags(), Utc::now())))
}

pub async fn delete_board(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
) -> Result<()> {
    state.store.lock().await.delete_board(board_id)?;
    Ok(())
}

/// `null` when no board is selected.
pub async fn get_current_board(
    State(state): State<AppState>,
) -> Result<Json<Option<BoardResponse>>> {
    let store = state.store.lock().await;

    Ok(Json(
        store
            .current_board()
            .map(|board| BoardResponse::new(board, store.tags(), Utc::now())),
    ))
}

pub async fn set_current_board(
    State(state): State<AppState>,
    Json(input): Json<SetCurrentBoard>,
) -> Result<Json<BoardResponse>> {
    let mut store = state.store.lock().await;
    if store.board(input.board_id).is_none() {
        return Err(NotFound::Board(input.board_id).into());
    }

    store.set_current_board(input.board_id);
    let board = store
        .current_board()
        .ok_or(NotFound::Board(input.board_id))?;

    Ok(Json(BoardResponse::new(board, store.tags(), Utc::now())))
}

pub async fn board_stats(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
) -> Result<Json<BoardStats>> {
    let store = state.store.lock().await;
    let board = store.board(board_id).ok_or(NotFound::Board(board_id))?;

    Ok(Json(BoardStats::new(board, Utc::now())))
}
