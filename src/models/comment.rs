use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(text: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            created_at: now,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateComment {
    pub text: String,
}
