/// Shared application state
use mixtape_core::PlaylistStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state shared across all handlers
///
/// Every store mutation goes through the write lock, so concurrent requests
/// never observe a half-applied operation.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<PlaylistStore>>,
    pub strict_status: bool,
}

impl AppState {
    pub fn new(store: PlaylistStore, strict_status: bool) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            strict_status,
        }
    }
}
