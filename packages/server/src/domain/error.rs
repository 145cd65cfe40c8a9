//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ConnectionId validation error
    #[error("ConnectionId cannot be empty")]
    ConnectionIdEmpty,

    /// DisplayName is blank after trimming
    #[error("DisplayName cannot be empty")]
    DisplayNameEmpty,

    /// RoomName validation error
    #[error("RoomName cannot be empty")]
    RoomNameEmpty,

    /// MessageText is blank after trimming
    #[error("MessageText cannot be empty")]
    MessageTextEmpty,
}

/// Errors raised by the presence registry. None of them mutate state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Another member of the room already uses this display name
    #[error("Name '{name}' is already present in room '{room}'")]
    NameTaken { name: String, room: String },

    /// The connection is already registered in some room
    #[error("Connection '{connection_id}' has already joined room '{room}'")]
    AlreadyJoined { connection_id: String, room: String },
}
