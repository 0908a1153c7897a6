//! Shared application state for the HTTP layer.

use std::sync::Arc;

use shabox::MessageVault;
use shabox_store::SqliteStore;

/// State shared across request handlers.
///
/// Built once at process start from the loaded configuration and passed
/// into the router; handlers reach the vault through it.
#[derive(Clone)]
pub struct AppState {
    /// The message vault over the SQLite store.
    pub vault: Arc<MessageVault<SqliteStore>>,
}

impl AppState {
    /// Create state over an already-opened store.
    pub fn new(store: SqliteStore) -> Self {
        Self {
            vault: Arc::new(MessageVault::new(store)),
        }
    }
}
