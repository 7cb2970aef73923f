use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::services::{backup, ImportSummary, StorageUsage};
use crate::state::AppState;

pub async fn export_data(State(state): State<AppState>) -> Result<Json<Value>> {
    let _store = state.store.lock().await;
    Ok(Json(backup::export(state.storage.as_ref(), Utc::now())))
}

/// Takes the raw backup document as the request body.
pub async fn import_data(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ImportSummary>> {
    let summary = state
        .rewrite_storage(|storage| backup::import(storage, &body))
        .await?;
    Ok(Json(summary))
}

/// Wipes stored data; the store comes back with a freshly seeded board.
pub async fn clear_data(State(state): State<AppState>) -> Result<()> {
    state
        .rewrite_storage(|storage| {
            backup::clear_all(storage);
            Ok::<_, AppError>(())
        })
        .await
}

pub async fn storage_usage(State(state): State<AppState>) -> Result<Json<StorageUsage>> {
    let _store = state.store.lock().await;
    Ok(Json(backup::storage_usage(state.storage.as_ref())))
}
