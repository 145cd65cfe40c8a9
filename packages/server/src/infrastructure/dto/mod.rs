//! Data transfer objects exchanged with clients.

pub mod websocket;

pub use websocket::{ClientEvent, JoinPayload, MessagePayload, ServerEvent};
