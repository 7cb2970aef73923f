pub mod board;
pub mod card;
pub mod column;
pub mod comment;
pub mod id;
pub mod tag;

pub use board::{
    Board, BoardResponse, CreateBoard, SetCurrentBoard, UpdateBoard, DEFAULT_BOARD_TITLE,
};
pub use card::{Card, CardResponse, CreateCard, MoveCard, Priority, UpdateCard};
pub use column::{
    Column, ColumnResponse, ColumnStatus, CreateColumn, MoveColumn, UpdateColumn,
    DEFAULT_COLUMN_COLOR,
};
pub use comment::{Comment, CreateComment, UpdateComment};
pub use tag::{CreateTag, Tag, UpdateTag};

use serde::{Deserialize, Deserializer};

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`)
/// so partial updates can clear optional values.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
