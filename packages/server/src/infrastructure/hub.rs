//! Connection hub: per-connection sender channels for outbound frames.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};

use crate::{
    domain::ConnectionId, infrastructure::dto::websocket::ServerEvent, usecase::EventSink,
};

/// Client connection information
pub struct ClientInfo {
    /// Message sender channel, drained by the connection's writer task
    pub sender: mpsc::UnboundedSender<String>,
}

/// Open connections, keyed by connection ID
#[derive(Default)]
pub struct ConnectionHub {
    clients: Mutex<HashMap<ConnectionId, ClientInfo>>,
}

impl ConnectionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start routing frames for `connection_id` into `sender`
    pub async fn register(&self, connection_id: ConnectionId, sender: mpsc::UnboundedSender<String>) {
        let mut clients = self.clients.lock().await;
        clients.insert(connection_id, ClientInfo { sender });
    }

    /// Stop routing frames for `connection_id`. Returns whether it was registered.
    pub async fn unregister(&self, connection_id: &ConnectionId) -> bool {
        let mut clients = self.clients.lock().await;
        clients.remove(connection_id).is_some()
    }

    pub async fn count(&self) -> usize {
        self.clients.lock().await.len()
    }
}

#[async_trait]
impl EventSink for ConnectionHub {
    async fn send(&self, recipients: &[ConnectionId], event: ServerEvent) {
        if recipients.is_empty() {
            return;
        }

        let json = match serde_json::to_string(&event) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize '{}' event: {}", event.name(), e);
                return;
            }
        };

        let clients = self.clients.lock().await;
        for target_id in recipients {
            match clients.get(target_id) {
                Some(client_info) => {
                    if client_info.sender.send(json.clone()).is_err() {
                        tracing::warn!(
                            "Failed to send '{}' to client '{}'",
                            event.name(),
                            target_id
                        );
                    }
                }
                None => {
                    tracing::warn!(
                        "Client '{}' is not connected; dropping '{}'",
                        target_id,
                        event.name()
                    );
                }
            }
        }
    }
}
