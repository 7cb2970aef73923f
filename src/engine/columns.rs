use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::board_mut;
use crate::error::NotFound;
use crate::models::{Board, Column, CreateColumn, UpdateColumn, DEFAULT_COLUMN_COLOR};
use crate::reorder::reorder;

/// Order value for a column appended to `columns`: the column count when
/// orders are dense, otherwise one past the highest live order. `None` when
/// the highest order leaves no room above it.
pub fn next_order(columns: &[Column]) -> Option<i32> {
    let count = i32::try_from(columns.len()).ok()?;
    match columns.iter().map(|column| column.order).max() {
        Some(max) => Some(count.max(max.checked_add(1)?)),
        None => Some(count),
    }
}

/// Sets every order to the column's index in `columns`.
fn number_by_position(columns: &mut [Column]) {
    for (position, column) in columns.iter_mut().enumerate() {
        column.order = position as i32;
    }
}

pub fn create_column(
    boards: &mut [Board],
    board_id: Uuid,
    input: CreateColumn,
    now: DateTime<Utc>,
) -> Result<Column, NotFound> {
    let board = board_mut(boards, board_id)?;
    let color = input
        .color
        .unwrap_or_else(|| DEFAULT_COLUMN_COLOR.to_string());
    let order = match next_order(&board.columns) {
        Some(order) => order,
        None => {
            board.columns.sort_by_key(|column| column.order);
            number_by_position(&mut board.columns);
            board.columns.len() as i32
        }
    };
    let column = Column::new(input.title, color, order);

    board.columns.push(column.clone());
    board.touch(now);
    Ok(column)
}

pub fn update_column(
    boards: &mut [Board],
    board_id: Uuid,
    column_id: Uuid,
    input: UpdateColumn,
    now: DateTime<Utc>,
) -> Result<Column, NotFound> {
    let board = board_mut(boards, board_id)?;
    let column = board
        .column_mut(column_id)
        .ok_or(NotFound::Column(column_id))?;
    input.apply(column);
    let column = column.clone();

    board.touch(now);
    Ok(column)
}

/// Removes the column together with its cards. Remaining orders are left
/// as they are; they still sort correctly and the next move densifies them.
pub fn delete_column(
    boards: &mut [Board],
    board_id: Uuid,
    column_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Column, NotFound> {
    let board = board_mut(boards, board_id)?;
    let index = board
        .columns
        .iter()
        .position(|column| column.id == column_id)
        .ok_or(NotFound::Column(column_id))?;
    let column = board.columns.remove(index);

    board.touch(now);
    Ok(column)
}

/// Moves the column at `source` to `target`, both indices into the
/// order-sorted sequence, then rewrites every order to its position.
pub fn move_column(
    boards: &mut [Board],
    board_id: Uuid,
    source: usize,
    target: usize,
    now: DateTime<Utc>,
) -> Result<(), NotFound> {
    let board = board_mut(boards, board_id)?;
    let len = board.columns.len();
    for index in [source, target] {
        if index >= len {
            return Err(NotFound::Position { index, len });
        }
    }

    let mut columns = std::mem::take(&mut board.columns);
    columns.sort_by_key(|column| column.order);
    board.columns = reorder(columns, source, target);
    number_by_position(&mut board.columns);
    board.touch(now);
    Ok(())
}
