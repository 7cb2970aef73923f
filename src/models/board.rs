use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::card::Card;
use super::column::{Column, ColumnResponse, ColumnStatus};
use super::tag::Tag;

pub const DEFAULT_BOARD_TITLE: &str = "Main Board";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn new(title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            columns: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The board materialised when nothing has been stored yet.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let mut board = Self::new(DEFAULT_BOARD_TITLE, now);
        board.columns = ColumnStatus::ALL
            .into_iter()
            .enumerate()
            .map(|(order, status)| Column::with_status(status, order as i32))
            .collect();
        board
    }

    /// Columns in display order. The sort is stable, so equal `order`
    /// values keep their storage order.
    pub fn sorted_columns(&self) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self.columns.iter().collect();
        columns.sort_by_key(|column| column.order);
        columns
    }

    pub fn column(&self, column_id: Uuid) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == column_id)
    }

    pub fn column_mut(&mut self, column_id: Uuid) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.id == column_id)
    }

    /// Card ids are unique per board, so a linear scan over every column
    /// finds at most one match.
    pub fn card(&self, card_id: Uuid) -> Option<&Card> {
        self.columns
            .iter()
            .flat_map(|column| column.cards.iter())
            .find(|card| card.id == card_id)
    }

    pub fn card_mut(&mut self, card_id: Uuid) -> Option<&mut Card> {
        self.columns
            .iter_mut()
            .flat_map(|column| column.cards.iter_mut())
            .find(|card| card.id == card_id)
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|column| column.cards.len()).sum()
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBoard {
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBoard {
    pub title: Option<String>,
}

impl UpdateBoard {
    pub fn apply(self, board: &mut Board, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            board.title = title;
        }
        board.touch(now);
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCurrentBoard {
    pub board_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub id: Uuid,
    pub title: String,
    pub columns: Vec<ColumnResponse>,
    pub card_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BoardResponse {
    /// Renders a board with its columns sorted by `order` and card tags
    /// resolved against the registry.
    pub fn new(board: &Board, registry: &[Tag], now: DateTime<Utc>) -> Self {
        Self {
            id: board.id,
            title: board.title.clone(),
            columns: board
                .sorted_columns()
                .into_iter()
                .map(|column| column.clone().into_response(registry, now))
                .collect(),
            card_count: board.card_count(),
            created_at: board.created_at,
            updated_at: board.updated_at,
        }
    }
}
