use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::card::{Card, CardResponse};
use super::tag::Tag;
use chrono::{DateTime, Utc};

pub const DEFAULT_COLUMN_COLOR: &str = "#3b82f6";

/// Stable workflow marker, independent of the column's display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnStatus {
    Todo,
    InProgress,
    Done,
}

impl ColumnStatus {
    pub const ALL: [ColumnStatus; 3] = [
        ColumnStatus::Todo,
        ColumnStatus::InProgress,
        ColumnStatus::Done,
    ];

    pub fn canonical_title(self) -> &'static str {
        match self {
            ColumnStatus::Todo => "To Do",
            ColumnStatus::InProgress => "In Progress",
            ColumnStatus::Done => "Done",
        }
    }

    pub fn default_color(self) -> &'static str {
        match self {
            ColumnStatus::Todo => "#ef4444",
            ColumnStatus::InProgress => "#f59e0b",
            ColumnStatus::Done => "#10b981",
        }
    }

    /// Exact-title match against the canonical titles, including the ones
    /// written by older Portuguese-language data.
    pub fn from_title(title: &str) -> Option<Self> {
        match title {
            "To Do" | "A Fazer" => Some(ColumnStatus::Todo),
            "In Progress" | "Em Progresso" => Some(ColumnStatus::InProgress),
            "Done" | "Concluído" => Some(ColumnStatus::Done),
            _ => None,
        }
    }
}

impl std::fmt::Display for ColumnStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnStatus::Todo => write!(f, "todo"),
            ColumnStatus::InProgress => write!(f, "inProgress"),
            ColumnStatus::Done => write!(f, "done"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: Uuid,
    pub title: String,
    pub color: String,
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ColumnStatus>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(title: impl Into<String>, color: impl Into<String>, order: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            color: color.into(),
            order,
            status: None,
            cards: Vec::new(),
        }
    }

    pub fn with_status(status: ColumnStatus, order: i32) -> Self {
        Self {
            status: Some(status),
            ..Self::new(status.canonical_title(), status.default_color(), order)
        }
    }

    /// Explicit status if set, otherwise whatever the title implies.
    pub fn effective_status(&self) -> Option<ColumnStatus> {
        self.status.or_else(|| ColumnStatus::from_title(&self.title))
    }

    pub fn card_position(&self, card_id: Uuid) -> Option<usize> {
        self.cards.iter().position(|card| card.id == card_id)
    }

    pub fn into_response(self, registry: &[Tag], now: DateTime<Utc>) -> ColumnResponse {
        ColumnResponse {
            id: self.id,
            title: self.title,
            color: self.color,
            order: self.order,
            status: self.status,
            cards: self
                .cards
                .into_iter()
                .map(|card| card.into_response(registry, now))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateColumn {
    pub title: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateColumn {
    pub title: Option<String>,
    pub color: Option<String>,
    pub order: Option<i32>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub status: Option<Option<ColumnStatus>>,
}

impl UpdateColumn {
    pub fn apply(self, column: &mut Column) {
        if let Some(title) = self.title {
            column.title = title;
        }
        if let Some(color) = self.color {
            column.color = color;
        }
        if let Some(order) = self.order {
            column.order = order;
        }
        if let Some(status) = self.status {
            column.status = status;
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveColumn {
    pub source_index: usize,
    pub target_index: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnResponse {
    pub id: Uuid,
    pub title: String,
    pub color: String,
    pub order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ColumnStatus>,
    pub cards: Vec<CardResponse>,
}
