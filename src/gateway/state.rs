use std::sync::Arc;

use crate::store::MemStore;
use crate::websocket::SubscriberRegistry;

/// Shared gateway state.
///
/// Both members are constructed once at process start and injected here;
/// handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    /// In-memory entity store
    pub store: Arc<MemStore>,
    /// Push-channel subscriber registry
    pub subscribers: Arc<SubscriberRegistry>,
}

impl AppState {
    pub fn new(store: Arc<MemStore>, subscribers: Arc<SubscriberRegistry>) -> Self {
        Self { store, subscribers }
    }
}
