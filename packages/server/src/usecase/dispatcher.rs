//! Event dispatcher: inbound client events in, outbound events out.
//!
//! Each handler finishes its registry work (a single locked call on the
//! repository) before anything is handed to the [`EventSink`].

use std::sync::Arc;

use crate::{
    domain::{ConnectionId, Departure, DisplayName, PresenceRepository},
    infrastructure::dto::websocket::{ClientEvent, ServerEvent},
};

use super::{
    error::ChatError, event_sink::EventSink, join_chat::JoinChatUseCase,
    leave_chat::LeaveChatUseCase, send_message::SendMessageUseCase,
};

pub struct EventDispatcher {
    join_chat: JoinChatUseCase,
    send_message: SendMessageUseCase,
    leave_chat: LeaveChatUseCase,
    sink: Arc<dyn EventSink>,
}

impl EventDispatcher {
    pub fn new(repository: Arc<dyn PresenceRepository>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            join_chat: JoinChatUseCase::new(repository.clone()),
            send_message: SendMessageUseCase::new(repository.clone()),
            leave_chat: LeaveChatUseCase::new(repository),
            sink,
        }
    }

    /// Route a decoded inbound event to its handler
    pub async fn dispatch(&self, connection_id: &ConnectionId, event: ClientEvent) {
        match event {
            ClientEvent::Join(payload) => {
                self.handle_join(connection_id, payload.username.as_deref().unwrap_or_default())
                    .await
            }
            ClientEvent::Message(payload) => {
                self.handle_message(connection_id, payload.message.as_deref().unwrap_or_default())
                    .await
            }
            ClientEvent::Leave => self.handle_leave(connection_id).await,
        }
    }

    pub async fn handle_join(&self, connection_id: &ConnectionId, raw_name: &str) {
        let joined = match self.join_chat.execute(connection_id.clone(), raw_name).await {
            Ok(joined) => joined,
            Err(e) => {
                tracing::warn!("Rejected join from '{}': {:?}", connection_id, e);
                self.reject(connection_id, e).await;
                return;
            }
        };
        tracing::info!(
            "'{}' joined room '{}' as '{}'",
            connection_id,
            joined.room.room,
            joined.name
        );

        self.sink
            .send(
                std::slice::from_ref(connection_id),
                ServerEvent::Joined {
                    username: joined.name.as_str().to_string(),
                },
            )
            .await;

        let others: Vec<ConnectionId> = joined
            .room
            .members
            .iter()
            .filter(|id| *id != connection_id)
            .cloned()
            .collect();
        if !others.is_empty() {
            self.sink
                .send(
                    &others,
                    ServerEvent::Status {
                        message: format!("{} joined the chat.", joined.name),
                    },
                )
                .await;
        }

        self.sink
            .send(&joined.room.members, user_list(&joined.room.names))
            .await;
    }

    pub async fn handle_message(&self, connection_id: &ConnectionId, raw_text: &str) {
        let broadcast = match self.send_message.execute(connection_id, raw_text).await {
            Ok(broadcast) => broadcast,
            Err(e) => {
                tracing::warn!("Rejected message from '{}': {:?}", connection_id, e);
                self.reject(connection_id, e).await;
                return;
            }
        };
        tracing::debug!(
            "Broadcasting message from '{}' to {} member(s)",
            broadcast.from,
            broadcast.recipients.len()
        );

        self.sink
            .send(
                &broadcast.recipients,
                ServerEvent::Message {
                    username: broadcast.from.into_string(),
                    message: broadcast.text.into_string(),
                },
            )
            .await;
    }

    /// Transport-level disconnect. Safe to call more than once.
    pub async fn handle_disconnect(&self, connection_id: &ConnectionId) {
        match self.leave_chat.execute(connection_id).await {
            Some(departure) => {
                tracing::info!("'{}' disconnected ({})", connection_id, departure.name);
                self.announce_departure(departure).await;
            }
            None => tracing::debug!("'{}' disconnected without joining", connection_id),
        }
    }

    /// Explicit leave: same removal as a disconnect, but the connection stays open
    pub async fn handle_leave(&self, connection_id: &ConnectionId) {
        if let Some(departure) = self.leave_chat.execute(connection_id).await {
            tracing::info!("'{}' left the chat ({})", connection_id, departure.name);
            self.announce_departure(departure).await;
        }
    }

    async fn announce_departure(&self, departure: Departure) {
        let remaining = departure.remaining;
        if remaining.members.is_empty() {
            return;
        }

        self.sink
            .send(
                &remaining.members,
                ServerEvent::Status {
                    message: format!("{} left the chat.", departure.name),
                },
            )
            .await;
        self.sink
            .send(&remaining.members, user_list(&remaining.names))
            .await;
    }

    async fn reject(&self, connection_id: &ConnectionId, error: ChatError) {
        self.sink
            .send(
                std::slice::from_ref(connection_id),
                ServerEvent::Error {
                    message: error.to_string(),
                },
            )
            .await;
    }
}

fn user_list(names: &[DisplayName]) -> ServerEvent {
    ServerEvent::UserList {
        users: names.iter().map(|n| n.as_str().to_string()).collect(),
    }
}
