use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::board_mut;
use crate::error::NotFound;
use crate::models::{Board, Card, Comment};

/// Runs `f` against the card's comment list, then bumps the card and
/// board timestamps.
fn with_comments<T>(
    boards: &mut [Board],
    board_id: Uuid,
    card_id: Uuid,
    now: DateTime<Utc>,
    f: impl FnOnce(&mut Vec<Comment>) -> Result<T, NotFound>,
) -> Result<T, NotFound> {
    let board = board_mut(boards, board_id)?;
    let card: &mut Card = board.card_mut(card_id).ok_or(NotFound::Card(card_id))?;
    let value = f(&mut card.comments)?;
    card.touch(now);

    board.touch(now);
    Ok(value)
}

pub fn add_comment(
    boards: &mut [Board],
    board_id: Uuid,
    card_id: Uuid,
    text: String,
    now: DateTime<Utc>,
) -> Result<Comment, NotFound> {
    with_comments(boards, board_id, card_id, now, |comments| {
        let comment = Comment::new(text, now);
        comments.push(comment.clone());
        Ok(comment)
    })
}

pub fn update_comment(
    boards: &mut [Board],
    board_id: Uuid,
    card_id: Uuid,
    comment_id: Uuid,
    text: String,
    now: DateTime<Utc>,
) -> Result<Comment, NotFound> {
    with_comments(boards, board_id, card_id, now, |comments| {
        let comment = comments
            .iter_mut()
            .find(|comment| comment.id == comment_id)
            .ok_or(NotFound::Comment(comment_id))?;
        comment.text = text;
        Ok(comment.clone())
    })
}

pub fn delete_comment(
    boards: &mut [Board],
    board_id: Uuid,
    card_id: Uuid,
    comment_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Comment, NotFound> {
    with_comments(boards, board_id, card_id, now, |comments| {
        let index = comments
            .iter()
            .position(|comment| comment.id == comment_id)
            .ok_or(NotFound::Comment(comment_id))?;
        Ok(comments.remove(index))
    })
}
