//! The board store: one immutable snapshot, replaced on every commit.
//!
//! Mutators clone the current snapshot, apply an engine operation to the
//! clone and swap it in only if the operation succeeded. A stale reference
//! therefore leaves the store exactly as it was. Readers holding an
//! `Arc<Snapshot>` keep a consistent view across later commits.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::engine::{boards, cards, columns, comments, tags};
use crate::error::{LoadError, NotFound};
use crate::models::{
    Board, Card, Column, Comment, CreateCard, CreateColumn, CreateTag, MoveCard, Tag, UpdateBoard,
    UpdateCard, UpdateColumn, UpdateTag,
};
use crate::repo::{codec, PersistListener, Storage};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Incremented on every commit.
    pub version: u64,
    pub boards: Vec<Board>,
    pub current_board_id: Option<Uuid>,
    pub tags: Vec<Tag>,
}

impl Snapshot {
    pub fn board(&self, board_id: Uuid) -> Option<&Board> {
        self.boards.iter().find(|board| board.id == board_id)
    }

    /// `None` when no board is selected or the selection is stale.
    pub fn current_board(&self) -> Option<&Board> {
        self.current_board_id.and_then(|id| self.board(id))
    }

    pub fn tag(&self, tag_id: Uuid) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.id == tag_id)
    }
}

/// Which persisted resource a commit touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    Boards,
    CurrentBoard,
    Tags,
}

pub trait StoreListener: Send + Sync {
    fn on_change(&self, change: Change, snapshot: &Snapshot);
}

#[derive(Default)]
pub struct KanbanStore {
    snapshot: Arc<Snapshot>,
    listeners: Vec<Arc<dyn StoreListener>>,
}

impl KanbanStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            listeners: Vec::new(),
        }
    }

    /// Rebuilds the store from storage and subscribes a [`PersistListener`]
    /// so every later commit is written back.
    ///
    /// With no stored boards the default board is seeded and persisted right
    /// away. Malformed stored data is an error; it is never replaced by the
    /// seed.
    pub fn load(storage: Arc<dyn Storage>) -> Result<Self, LoadError> {
        let stored_boards = codec::load_boards(storage.as_ref())?;
        let tags = codec::load_tags(storage.as_ref())?.unwrap_or_default();
        let pointer = codec::load_current_board(storage.as_ref());

        let seeded = stored_boards.is_none();
        let boards = stored_boards.unwrap_or_else(|| boards::default_seed(Utc::now()));
        let current_board_id = pointer.or_else(|| boards.first().map(|board| board.id));

        tracing::info!(
            boards = boards.len(),
            tags = tags.len(),
            seeded,
            "loaded kanban state"
        );

        let mut store = Self::new(Snapshot {
            version: 0,
            boards,
            current_board_id,
            tags,
        });
        let listener = Arc::new(PersistListener::new(storage));
        if seeded {
            listener.on_change(Change::Boards, &store.snapshot);
            listener.on_change(Change::CurrentBoard, &store.snapshot);
        }
        store.subscribe(listener);
        Ok(store)
    }

    pub fn subscribe(&mut self, listener: Arc<dyn StoreListener>) {
        self.listeners.push(listener);
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn version(&self) -> u64 {
        self.snapshot.version
    }

    pub fn boards(&self) -> &[Board] {
        &self.snapshot.boards
    }

    pub fn tags(&self) -> &[Tag] {
        &self.snapshot.tags
    }

    pub fn board(&self, board_id: Uuid) -> Option<&Board> {
        self.snapshot.board(board_id)
    }

    pub fn current_board_id(&self) -> Option<Uuid> {
        self.snapshot.current_board_id
    }

    pub fn current_board(&self) -> Option<&Board> {
        self.snapshot.current_board()
    }

    pub fn card(&self, board_id: Uuid, card_id: Uuid) -> Option<&Card> {
        self.board(board_id).and_then(|board| board.card(card_id))
    }

    /// Applies `op` to a copy of the snapshot and swaps it in on success.
    fn try_commit<T>(
        &mut self,
        changes: &[Change],
        op: impl FnOnce(&mut Snapshot) -> Result<T, NotFound>,
    ) -> Result<T, NotFound> {
        let mut next = Snapshot::clone(&self.snapshot);
        let value = op(&mut next).map_err(|err| {
            tracing::debug!(%err, "ignoring operation on stale reference");
            err
        })?;
        self.publish(next, changes);
        Ok(value)
    }

    fn commit<T>(&mut self, changes: &[Change], op: impl FnOnce(&mut Snapshot) -> T) -> T {
        let mut next = Snapshot::clone(&self.snapshot);
        let value = op(&mut next);
        self.publish(next, changes);
        value
    }

    /// Listeners hear about every change in `changes`, plus `CurrentBoard`
    /// whenever the pointer moved.
    fn publish(&mut self, mut next: Snapshot, changes: &[Change]) {
        let pointer_moved = next.current_board_id != self.snapshot.current_board_id;
        next.version += 1;
        self.snapshot = Arc::new(next);

        let mut notify = changes.to_vec();
        if pointer_moved && !notify.contains(&Change::CurrentBoard) {
            notify.push(Change::CurrentBoard);
        }
        for change in notify {
            for listener in &self.listeners {
                listener.on_change(change, &self.snapshot);
            }
        }
    }

    // Boards

    /// Appends a board with no columns and selects it.
    pub fn create_board(&mut self, title: impl Into<String>) -> Board {
        let title = title.into();
        let board = self.commit(&[Change::Boards], |s| {
            let board = boards::create_board(&mut s.boards, title, Utc::now());
            s.current_board_id = Some(board.id);
            board
        });
        tracing::info!(board_id = %board.id, "created board");
        board
    }

    pub fn update_board(&mut self, board_id: Uuid, input: UpdateBoard) -> Result<Board, NotFound> {
        self.try_commit(&[Change::Boards], |s| {
            boards::update_board(&mut s.boards, board_id, input, Utc::now())
        })
    }

    /// Removes the board. If it was selected, the first remaining board is
    /// selected instead, or nothing when none remain.
    pub fn delete_board(&mut self, board_id: Uuid) -> Result<Board, NotFound> {
        let board = self.try_commit(&[Change::Boards], |s| {
            let removed = boards::delete_board(&mut s.boards, board_id)?;
            s.current_board_id =
                boards::current_after_delete(&s.boards, s.current_board_id, board_id);
            Ok(removed)
        })?;
        tracing::info!(%board_id, "deleted board");
        Ok(board)
    }

    /// Pure selection; the id is not checked against the collection.
    /// Re-selecting the current board commits nothing.
    pub fn set_current_board(&mut self, board_id: Uuid) {
        if self.snapshot.current_board_id == Some(board_id) {
            return;
        }
        self.commit(&[Change::CurrentBoard], |s| {
            s.current_board_id = Some(board_id);
        });
    }

    // Columns

    pub fn create_column(
        &mut self,
        board_id: Uuid,
        input: CreateColumn,
    ) -> Result<Column, NotFound> {
        self.try_commit(&[Change::Boards], |s| {
            columns::create_column(&mut s.boards, board_id, input, Utc::now())
        })
    }

    pub fn update_column(
        &mut self,
        board_id: Uuid,
        column_id: Uuid,
        input: UpdateColumn,
    ) -> Result<Column, NotFound> {
        self.try_commit(&[Change::Boards], |s| {
            columns::update_column(&mut s.boards, board_id, column_id, input, Utc::now())
        })
    }

    pub fn delete_column(&mut self, board_id: Uuid, column_id: Uuid) -> Result<Column, NotFound> {
        self.try_commit(&[Change::Boards], |s| {
            columns::delete_column(&mut s.boards, board_id, column_id, Utc::now())
        })
    }

    pub fn move_column(
        &mut self,
        board_id: Uuid,
        source_index: usize,
        target_index: usize,
    ) -> Result<(), NotFound> {
        self.try_commit(&[Change::Boards], |s| {
            columns::move_column(&mut s.boards, board_id, source_index, target_index, Utc::now())
        })
    }

    // Cards

    pub fn create_card(
        &mut self,
        board_id: Uuid,
        column_id: Uuid,
        input: CreateCard,
    ) -> Result<Card, NotFound> {
        self.try_commit(&[Change::Boards], |s| {
            cards::create_card(&mut s.boards, board_id, column_id, input, Utc::now())
        })
    }

    pub fn update_card(
        &mut self,
        board_id: Uuid,
        card_id: Uuid,
        input: UpdateCard,
    ) -> Result<Card, NotFound> {
        self.try_commit(&[Change::Boards], |s| {
            cards::update_card(&mut s.boards, board_id, card_id, input, Utc::now())
        })
    }

    pub fn delete_card(&mut self, board_id: Uuid, card_id: Uuid) -> Result<Card, NotFound> {
        self.try_commit(&[Change::Boards], |s| {
            cards::delete_card(&mut s.boards, board_id, card_id, Utc::now())
        })
    }

    pub fn move_card(
        &mut self,
        board_id: Uuid,
        card_id: Uuid,
        input: &MoveCard,
    ) -> Result<Card, NotFound> {
        self.try_commit(&[Change::Boards], |s| {
            cards::move_card(&mut s.boards, board_id, card_id, input, Utc::now())
        })
    }

    // Comments

    pub fn add_comment(
        &mut self,
        board_id: Uuid,
        card_id: Uuid,
        text: impl Into<String>,
    ) -> Result<Comment, NotFound> {
        let text = text.into();
        self.try_commit(&[Change::Boards], |s| {
            comments::add_comment(&mut s.boards, board_id, card_id, text, Utc::now())
        })
    }

    pub fn update_comment(
        &mut self,
        board_id: Uuid,
        card_id: Uuid,
        comment_id: Uuid,
        text: impl Into<String>,
    ) -> Result<Comment, NotFound> {
        let text = text.into();
        self.try_commit(&[Change::Boards], |s| {
            comments::update_comment(&mut s.boards, board_id, card_id, comment_id, text, Utc::now())
        })
    }

    pub fn delete_comment(
        &mut self,
        board_id: Uuid,
        card_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Comment, NotFound> {
        self.try_commit(&[Change::Boards], |s| {
            comments::delete_comment(&mut s.boards, board_id, card_id, comment_id, Utc::now())
        })
    }

    // Tags

    pub fn create_tag(&mut self, input: CreateTag) -> Tag {
        self.commit(&[Change::Tags], |s| tags::create_tag(&mut s.tags, input))
    }

    pub fn update_tag(&mut self, tag_id: Uuid, input: UpdateTag) -> Result<Tag, NotFound> {
        self.try_commit(&[Change::Tags], |s| tags::update_tag(&mut s.tags, tag_id, input))
    }

    /// Removes the tag from the registry and from every card in one commit.
    pub fn delete_tag(&mut self, tag_id: Uuid) -> Result<Tag, NotFound> {
        let tag = self.try_commit(&[Change::Tags, Change::Boards], |s| {
            let removed = tags::remove_tag(&mut s.tags, tag_id)?;
            s.boards = tags::strip_tag(&s.boards, tag_id, Utc::now());
            Ok(removed)
        })?;
        tracing::info!(%tag_id, "deleted tag");
        Ok(tag)
    }
}
