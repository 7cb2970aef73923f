//! JSON wire format for persisted datasets.
//!
//! Timestamps travel as RFC 3339 strings and come back as `DateTime<Utc>`,
//! so a round trip yields equal instants, not just equal text.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use super::{Namespace, Storage};
use crate::error::LoadError;
use crate::models::{id, Board, Tag};

pub fn encode<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

pub fn decode<T: DeserializeOwned>(raw: &str) -> serde_json::Result<T> {
    serde_json::from_str(raw)
}

fn load_json<T: DeserializeOwned>(
    storage: &dyn Storage,
    namespace: Namespace,
) -> Result<Option<T>, LoadError> {
    storage
        .load(namespace.key())
        .map(|raw| {
            decode(&raw).map_err(|source| LoadError::Malformed {
                key: namespace.key(),
                source,
            })
        })
        .transpose()
}

pub fn load_boards(storage: &dyn Storage) -> Result<Option<Vec<Board>>, LoadError> {
    load_json(storage, Namespace::KanbanBoards)
}

pub fn load_tags(storage: &dyn Storage) -> Result<Option<Vec<Tag>>, LoadError> {
    load_json(storage, Namespace::KanbanTags)
}

/// The pointer is stored as a bare id, not as JSON.
pub fn load_current_board(storage: &dyn Storage) -> Option<Uuid> {
    storage
        .load(Namespace::KanbanCurrentBoard.key())
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| id::parse_id(&raw))
}
