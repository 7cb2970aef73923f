use std::sync::Arc;

use super::{codec, Namespace, Storage};
use crate::store::{Change, Snapshot, StoreListener};

/// Writes each changed resource to its own key. The writes are independent:
/// a failed boards write does not undo the pointer write, and vice versa.
pub struct PersistListener {
    storage: Arc<dyn Storage>,
}

impl PersistListener {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    fn save_json<T: serde::Serialize + ?Sized>(&self, namespace: Namespace, value: &T) {
        match codec::encode(value) {
            Ok(raw) => self.storage.save(namespace.key(), &raw),
            Err(e) => tracing::warn!(key = namespace.key(), error = %e, "failed to encode"),
        }
    }
}

impl StoreListener for PersistListener {
    fn on_change(&self, change: Change, snapshot: &Snapshot) {
        match change {
            Change::Boards => self.save_json(Namespace::KanbanBoards, &snapshot.boards),
            Change::Tags => self.save_json(Namespace::KanbanTags, &snapshot.tags),
            Change::CurrentBoard => {
                let key = Namespace::KanbanCurrentBoard.key();
                match snapshot.current_board_id {
                    Some(id) => self.storage.save(key, &id.to_string()),
                    None => self.storage.remove(key),
                }
            }
        }
    }
}
