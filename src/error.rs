use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

/// A stale reference. Operations that fail with this leave the store's
/// snapshot untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFound {
    #[error("board {0} not found")]
    Board(Uuid),

    #[error("column {0} not found")]
    Column(Uuid),

    #[error("card {0} not found")]
    Card(Uuid),

    #[error("comment {0} not found")]
    Comment(Uuid),

    #[error("tag {0} not found")]
    Tag(Uuid),

    #[error("no column at position {index} (board has {len})")]
    Position { index: usize, len: usize },
}

/// Persisted data that cannot be decoded. Fatal to loading the store.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("malformed data under `{key}`: {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("backup is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("backup must be a JSON object")]
    NotAnObject,

    #[error("backup is missing the `{0}` field")]
    MissingField(&'static str),

    #[error("backup field `{field}` is malformed: {source}")]
    MalformedField {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("backup field `{0}` must be a string")]
    NotAString(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(#[from] NotFound),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),
}

impl From<BackupError> for AppError {
    fn from(err: BackupError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Load(e) => {
                tracing::error!("Load error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Stored data is corrupt".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
