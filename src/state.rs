use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{AppError, LoadError};
use crate::repo::Storage;
use crate::store::KanbanStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<KanbanStore>>,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn load(storage: Arc<dyn Storage>) -> Result<Self, LoadError> {
        let store = KanbanStore::load(storage.clone())?;
        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            storage,
        })
    }

    /// Runs `op` directly against storage, then rebuilds the store from
    /// what storage now holds. The store lock is held throughout, so no
    /// commit can land in between.
    pub async fn rewrite_storage<T, E>(
        &self,
        op: impl FnOnce(&dyn Storage) -> Result<T, E>,
    ) -> Result<T, AppError>
    where
        E: Into<AppError>,
    {
        let mut store = self.store.lock().await;
        let value = op(self.storage.as_ref()).map_err(Into::into)?;
        *store = KanbanStore::load(self.storage.clone())?;
        Ok(value)
    }
}
