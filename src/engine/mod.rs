//! Pure state transitions over the board collection.
//!
//! Every function takes the working copy of a snapshot and either applies
//! the whole operation or returns [`NotFound`] having changed nothing
//! observable; the store discards the working copy on error.

pub mod boards;
pub mod cards;
pub mod columns;
pub mod comments;
pub mod tags;

use uuid::Uuid;

use crate::error::NotFound;
use crate::models::Board;

pub(crate) fn board_mut(boards: &mut [Board], board_id: Uuid) -> Result<&mut Board, NotFound> {
    boards
        .iter_mut()
        .find(|board| board.id == board_id)
        .ok_or(NotFound::Board(board_id))
}
