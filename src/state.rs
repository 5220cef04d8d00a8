use std::sync::Arc;

use crate::store::TodoStore;

/// Shared handle to the store, acquired once at startup and kept for the
/// life of the process.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: impl TodoStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
