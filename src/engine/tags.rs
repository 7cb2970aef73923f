use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::NotFound;
use crate::models::{Board, Card, CreateTag, Tag, UpdateTag};

pub fn create_tag(tags: &mut Vec<Tag>, input: CreateTag) -> Tag {
    let tag = Tag::new(input);
    tags.push(tag.clone());
    tag
}

pub fn update_tag(tags: &mut [Tag], tag_id: Uuid, input: UpdateTag) -> Result<Tag, NotFound> {
    let tag = tags
        .iter_mut()
        .find(|tag| tag.id == tag_id)
        .ok_or(NotFound::Tag(tag_id))?;
    input.apply(tag);
    Ok(tag.clone())
}

/// Removes the tag from the registry only. Pair with [`strip_tag`] in the
/// same commit.
pub fn remove_tag(tags: &mut Vec<Tag>, tag_id: Uuid) -> Result<Tag, NotFound> {
    let index = tags
        .iter()
        .position(|tag| tag.id == tag_id)
        .ok_or(NotFound::Tag(tag_id))?;
    Ok(tags.remove(index))
}

/// Returns a copy of `boards` with `tag_id` filtered out of every card.
/// Cards that carried the tag, and their boards, get `now` as updatedAt.
pub fn strip_tag(boards: &[Board], tag_id: Uuid, now: DateTime<Utc>) -> Vec<Board> {
    boards
        .iter()
        .map(|board| {
            let mut board = board.clone();
            let mut touched = false;
            for card in board.columns.iter_mut().flat_map(|c| c.cards.iter_mut()) {
                if card.has_tag(tag_id) {
                    card.tags.retain(|id| *id != tag_id);
                    card.touch(now);
                    touched = true;
                }
            }
            if touched {
                board.touch(now);
            }
            board
        })
        .collect()
}

/// The card's tags that still exist in the registry, in card order.
/// Dangling ids are skipped.
pub fn resolve_tags<'a>(card: &Card, registry: &'a [Tag]) -> Vec<&'a Tag> {
    card.tags
        .iter()
        .filter_map(|id| registry.iter().find(|tag| tag.id == *id))
        .collect()
}
