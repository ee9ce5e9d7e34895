use std::sync::{Arc, Mutex};

use crate::api::FlashcardApi;
use crate::error::{FlashcardError, Result};
use crate::store::DataStore;

/// Shared server state. Store access is serialized through a single lock.
pub struct AppState<S: DataStore> {
    api: Mutex<FlashcardApi<S>>,
}

impl<S: DataStore + Send + 'static> AppState<S> {
    pub fn new(store: S) -> Arc<Self> {
        Arc::new(Self {
            api: Mutex::new(FlashcardApi::new(store)),
        })
    }

    /// Runs `op` against the API on the blocking pool. Stores do synchronous
    /// file I/O, so the lock is taken there rather than on a runtime worker.
    pub async fn with_api<T, F>(self: &Arc<Self>, op: F) -> Result<T>
    where
        F: FnOnce(&mut FlashcardApi<S>) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let state = Arc::clone(self);
        tokio::task::spawn_blocking(move || {
            let mut api = state
                .api
                .lock()
                .map_err(|_| FlashcardError::Store("store lock poisoned".to_string()))?;
            op(&mut api)
        })
        .await
        .map_err(|e| FlashcardError::Store(format!("store task failed: {e}")))?
    }
}
