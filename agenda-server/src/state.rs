use std::sync::Arc;

use agenda_core::EventStore;

/// Shared application state.
///
/// The store is constructed once at startup and threaded through the
/// router; handlers never touch global state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EventStore>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            store: Arc::new(EventStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
