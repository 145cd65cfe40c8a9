//! Core domain models for the chat application.

use super::{
    error::RegistryError,
    value_object::{ConnectionId, DisplayName, RoomName},
};

/// Represents a participant in a chat room
///
/// Name and connection are fixed for the lifetime of the entry; changing
/// either means leaving and joining again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Transport-assigned connection identifier
    pub connection_id: ConnectionId,
    /// Display name, unique within the room
    pub name: DisplayName,
}

impl Participant {
    /// Create a new participant
    pub fn new(connection_id: ConnectionId, name: DisplayName) -> Self {
        Self {
            connection_id,
            name,
        }
    }
}

/// Represents a chat room and its current members
#[derive(Debug, Clone)]
pub struct Room {
    /// Room name
    pub name: RoomName,
    /// Participants currently in the room
    participants: Vec<Participant>,
    /// Pinned rooms survive becoming empty
    pinned: bool,
}

impl Room {
    /// Create a room that is kept even when its last member leaves
    pub fn pinned(name: RoomName) -> Self {
        Self {
            name,
            participants: Vec::new(),
            pinned: true,
        }
    }

    /// Create a room that is dropped once its last member leaves
    pub fn transient(name: RoomName) -> Self {
        Self {
            name,
            participants: Vec::new(),
            pinned: false,
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether some member uses exactly this display name
    pub fn has_name(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p.name.as_str() == name)
    }

    /// Add a participant to the room
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NameTaken` if the display name is already used here
    pub fn add_participant(&mut self, participant: Participant) -> Result<(), RegistryError> {
        if self.has_name(participant.name.as_str()) {
            return Err(RegistryError::NameTaken {
                name: participant.name.into_string(),
                room: self.name.as_str().to_string(),
            });
        }
        self.participants.push(participant);
        Ok(())
    }

    /// Remove a participant from the room by connection ID
    pub fn remove_participant(&mut self, connection_id: &ConnectionId) -> Option<Participant> {
        let index = self
            .participants
            .iter()
            .position(|p| &p.connection_id == connection_id)?;
        Some(self.participants.remove(index))
    }

    /// Get a participant by connection ID
    pub fn get_participant(&self, connection_id: &ConnectionId) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|p| &p.connection_id == connection_id)
    }

    /// Participants ordered by display name
    pub fn sorted_participants(&self) -> Vec<&Participant> {
        let mut sorted: Vec<&Participant> = self.participants.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }
}
