//! Dirty tracking for an in-progress card edit.
//!
//! A session keeps the card's editable fields as they were when editing
//! began and compares the draft against them. While the draft differs,
//! navigation requests are held back until the caller saves, discards or
//! cancels.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::NotFound;
use crate::models::{Card, Priority, UpdateCard};
use crate::store::KanbanStore;

/// The editable subset of a card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub assignee: String,
    pub due_date: Option<DateTime<Utc>>,
    pub tags: Vec<Uuid>,
}

impl From<&Card> for CardDraft {
    fn from(card: &Card) -> Self {
        Self {
            title: card.title.clone(),
            description: card.description.clone(),
            priority: card.priority,
            assignee: card.assignee.clone(),
            due_date: card.due_date,
            tags: card.tags.clone(),
        }
    }
}

impl CardDraft {
    /// Field-wise comparison. Tags compare as sets: toggling a tag off and
    /// back on is not a change.
    pub fn differs_from(&self, other: &CardDraft) -> bool {
        let sorted = |tags: &[Uuid]| {
            let mut tags = tags.to_vec();
            tags.sort();
            tags.dedup();
            tags
        };

        self.title != other.title
            || self.description != other.description
            || self.priority != other.priority
            || self.assignee != other.assignee
            || self.due_date != other.due_date
            || sorted(&self.tags) != sorted(&other.tags)
    }

    pub fn to_update(&self) -> UpdateCard {
        UpdateCard {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            priority: Some(self.priority),
            assignee: Some(self.assignee.clone()),
            due_date: Some(self.due_date),
            tags: Some(self.tags.clone()),
        }
    }
}

/// An open edit of one card, generic over the navigation action it may
/// have to hold back.
#[derive(Debug)]
pub struct CardEditSession<A> {
    board_id: Uuid,
    card_id: Uuid,
    baseline: CardDraft,
    draft: CardDraft,
    pending: Option<A>,
}

impl<A> CardEditSession<A> {
    pub fn begin(board_id: Uuid, card: &Card) -> Self {
        let baseline = CardDraft::from(card);
        Self {
            board_id,
            card_id: card.id,
            draft: baseline.clone(),
            baseline,
            pending: None,
        }
    }

    pub fn board_id(&self) -> Uuid {
        self.board_id
    }

    pub fn card_id(&self) -> Uuid {
        self.card_id
    }

    pub fn draft(&self) -> &CardDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CardDraft {
        &mut self.draft
    }

    pub fn toggle_tag(&mut self, tag_id: Uuid) {
        if let Some(index) = self.draft.tags.iter().position(|id| *id == tag_id) {
            self.draft.tags.remove(index);
        } else {
            self.draft.tags.push(tag_id);
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.draft.differs_from(&self.baseline)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Hands `action` straight back when there is nothing to lose.
    /// Otherwise holds it (replacing any earlier one) and returns `None`;
    /// the caller should then ask whether to save or discard.
    pub fn request(&mut self, action: A) -> Option<A> {
        if !self.is_dirty() {
            return Some(action);
        }
        tracing::debug!(card_id = %self.card_id, "holding navigation for unsaved edit");
        self.pending = Some(action);
        None
    }

    /// Merges the draft into the store and releases the held action.
    /// On a stale card the draft and the held action are both kept.
    pub fn save(&mut self, store: &mut KanbanStore) -> Result<Option<A>, NotFound> {
        let card = store.update_card(self.board_id, self.card_id, self.draft.to_update())?;
        self.baseline = CardDraft::from(&card);
        self.draft = self.baseline.clone();
        Ok(self.pending.take())
    }

    /// Throws the draft away and releases the held action.
    pub fn discard(&mut self) -> Option<A> {
        self.draft = self.baseline.clone();
        self.pending.take()
    }

    /// Drops the held action and keeps editing.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
