use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{CreateTag, Tag, UpdateTag};
use crate::state::AppState;

pub async fn create_tag(
    State(state): State<AppState>,
    Json(input): Json<CreateTag>,
) -> Result<Json<Tag>> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation("Tag name is required".to_string()));
    }

    let tag = state.store.lock().await.create_tag(input);
    Ok(Json(tag))
}

pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<Tag>>> {
    let tags = state.store.lock().await.tags().to_vec();
    Ok(Json(tags))
}

pub async fn update_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<Uuid>,
    Json(input): Json<UpdateTag>,
) -> Result<Json<Tag>> {
    if input.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::Validation("Tag name cannot be empty".to_string()));
    }

    let tag = state.store.lock().await.update_tag(tag_id, input)?;
    Ok(Json(tag))
}

/// Removes the tag from the registry and from every card on every board.
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<Uuid>,
) -> Result<()> {
    state.store.lock().await.delete_tag(tag_id)?;
    Ok(())
}
