//! Server state and connection management.

use std::sync::Arc;

use crate::{
    domain::PresenceRepository,
    infrastructure::{ConnectionHub, repository::InMemoryPresenceRepository},
    usecase::EventDispatcher,
};

/// Shared application state
pub struct AppState {
    /// Inbound event handling (registry + fan-out)
    pub dispatcher: EventDispatcher,
    /// WebSocket sender channels, shared with the dispatcher as its sink
    pub hub: Arc<ConnectionHub>,
}

impl AppState {
    /// Fresh state with an empty registry (global room only)
    pub fn new() -> Self {
        Self::with_repository(Arc::new(InMemoryPresenceRepository::new()))
    }

    pub fn with_repository(repository: Arc<dyn PresenceRepository>) -> Self {
        let hub = Arc::new(ConnectionHub::new());
        let dispatcher = EventDispatcher::new(repository, hub.clone());
        Self { dispatcher, hub }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
