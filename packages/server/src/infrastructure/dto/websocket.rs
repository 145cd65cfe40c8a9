//! WebSocket message DTOs for the chat application.
//!
//! Every frame is a JSON object of the form `{"event": "<name>", "data": {...}}`.

use serde::{Deserialize, Serialize};

/// Payload of an inbound `join` event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinPayload {
    /// Missing or `null` is treated as an empty name
    #[serde(default)]
    pub username: Option<String>,
}

/// Payload of an inbound `message` event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    /// Missing or `null` is treated as an empty message
    #[serde(default)]
    pub message: Option<String>,
}

/// Events sent by clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    Join(JoinPayload),
    Message(MessagePayload),
    Leave,
}

/// Events sent to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Sent to the joining connection only
    Joined { username: String },
    /// Sent to the originating connection only
    Error { message: String },
    /// Room-wide notice such as "alice joined the chat."
    Status { message: String },
    /// Room member names, sorted
    UserList { users: Vec<String> },
    /// Chat message, delivered to the whole room including the sender
    Message { username: String, message: String },
}

impl ServerEvent {
    /// Event name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::Joined { .. } => "joined",
            Self::Error { .. } => "error",
            Self::Status { .. } => "status",
            Self::UserList { .. } => "user_list",
            Self::Message { .. } => "message",
        }
    }
}
