use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::board_mut;
use crate::error::NotFound;
use crate::models::{Board, UpdateBoard};

/// Collection written on first launch: one board with the three
/// canonical columns.
pub fn default_seed(now: DateTime<Utc>) -> Vec<Board> {
    vec![Board::seeded(now)]
}

pub fn create_board(boards: &mut Vec<Board>, title: String, now: DateTime<Utc>) -> Board {
    let board = Board::new(title, now);
    boards.push(board.clone());
    board
}

pub fn update_board(
    boards: &mut [Board],
    board_id: Uuid,
    input: UpdateBoard,
    now: DateTime<Utc>,
) -> Result<Board, NotFound> {
    let board = board_mut(boards, board_id)?;
    input.apply(board, now);
    Ok(board.clone())
}

pub fn delete_board(boards: &mut Vec<Board>, board_id: Uuid) -> Result<Board, NotFound> {
    let index = boards
        .iter()
        .position(|board| board.id == board_id)
        .ok_or(NotFound::Board(board_id))?;
    Ok(boards.remove(index))
}

/// Current-board pointer after `deleted` has been removed from `remaining`.
pub fn current_after_delete(
    remaining: &[Board],
    current: Option<Uuid>,
    deleted: Uuid,
) -> Option<Uuid> {
    match remaining.first() {
        None => None,
        Some(first) if current == Some(deleted) => Some(first.id),
        Some(_) => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColumnStatus;

    #[test]
    fn test_default_seed_has_canonical_columns() {
        let boards = default_seed(Utc::now());
        assert_eq!(boards.len(), 1);

        let board = &boards[0];
        assert_eq!(board.title, crate::models::DEFAULT_BOARD_TITLE);
        let titles: Vec<&str> = board.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["To Do", "In Progress", "Done"]);
        let orders: Vec<i32> = board.columns.iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        assert_eq!(board.columns[2].status, Some(ColumnStatus::Done));
    }

    #[test]
    fn test_create_board_accepts_empty_title() {
        let mut boards = Vec::new();
        let board = create_board(&mut boards, String::new(), Utc::now());
        assert_eq!(boards.len(), 1);
        assert!(board.title.is_empty());
        assert!(board.columns.is_empty());
    }

    #[test]
    fn test_update_missing_board() {
        let mut boards = default_seed(Utc::now());
        let before = boards.clone();
        let missing = Uuid::new_v4();

        let result = update_board(&mut boards, missing, UpdateBoard::default(), Utc::now());
        assert_eq!(result, Err(NotFound::Board(missing)));
        assert_eq!(boards, before);
    }

    #[test]
    fn test_current_after_delete() {
        let now = Utc::now();
        let a = Board::new("A", now);
        let b = Board::new("B", now);

        assert_eq!(current_after_delete(&[], Some(a.id), a.id), None);
        assert_eq!(
            current_after_delete(&[b.clone()], Some(a.id), a.id),
            Some(b.id)
        );
        assert_eq!(
            current_after_delete(&[b.clone()], Some(b.id), a.id),
            Some(b.id)
        );
        assert_eq!(current_after_delete(&[b], None, a.id), None);
    }
}
