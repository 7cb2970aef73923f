use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Comment, CreateComment, UpdateComment};
use crate::state::AppState;

pub async fn add_comment(
    State(state): State<AppState>,
    Path((board_id, card_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<CreateComment>,
) -> Result<Json<Comment>> {
    if input.text.trim().is_empty() {
        return Err(AppError::Validation("Comment text is required".to_string()));
    }

    let comment = state
        .store
        .lock()
        .await
        .add_comment(board_id, card_id, input.text)?;
    Ok(Json(comment))
}

pub async fn update_comment(
    State(state): State<AppState>,
    Path((board_id, card_id, comment_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(input): Json<UpdateComment>,
) -> Result<Json<Comment>> {
    if input.text.trim().is_empty() {
        return Err(AppError::Validation("Comment text is required".to_string()));
    }

    let comment =
        state
            .store
            .lock()
            .await
            .update_comment(board_id, card_id, comment_id, input.text)?;
    Ok(Json(comment))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Path((board_id, card_id, comment_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<()> {
    state
        .store
        .lock()
        .await
        .delete_comment(board_id, card_id, comment_id)?;
    Ok(())
}
