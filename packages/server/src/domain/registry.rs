//! Presence registry: which connection is in which room under which name.
//!
//! Pure in-memory state with no I/O. Callers are responsible for
//! serializing access (see `InMemoryPresenceRepository`).
//!
//! Invariants maintained by every operation:
//! - display names are unique within a room
//! - a connection is a member of at most one room
//! - the global room always exists; other rooms exist only while non-empty

use std::collections::HashMap;

use super::{
    entity::{Participant, Room},
    error::RegistryError,
    value_object::{ConnectionId, DisplayName, RoomName},
};

/// In-memory presence registry
#[derive(Debug)]
pub struct PresenceRegistry {
    rooms: HashMap<RoomName, Room>,
    /// Secondary index, updated in the same call as `rooms`
    locations: HashMap<ConnectionId, RoomName>,
}

impl Default for PresenceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PresenceRegistry {
    /// Create a registry containing only the (empty) global room
    pub fn new() -> Self {
        let global = RoomName::global();
        let mut rooms = HashMap::new();
        rooms.insert(global.clone(), Room::pinned(global));
        Self {
            rooms,
            locations: HashMap::new(),
        }
    }

    /// Insert a participant entry, creating the room if needed.
    ///
    /// # Errors
    ///
    /// * `RegistryError::AlreadyJoined` - the connection is already registered somewhere
    /// * `RegistryError::NameTaken` - `name` is already used in `room`
    pub fn add_user(
        &mut self,
        name: DisplayName,
        connection_id: ConnectionId,
        room: &RoomName,
    ) -> Result<(), RegistryError> {
        if let Some(current) = self.locations.get(&connection_id) {
            return Err(RegistryError::AlreadyJoined {
                connection_id: connection_id.as_str().to_string(),
                room: current.as_str().to_string(),
            });
        }
        if self.name_exists(name.as_str(), room) {
            return Err(RegistryError::NameTaken {
                name: name.into_string(),
                room: room.as_str().to_string(),
            });
        }

        let entry = self
            .rooms
            .entry(room.clone())
            .or_insert_with(|| Room::transient(room.clone()));
        entry.add_participant(Participant::new(connection_id.clone(), name))?;
        self.locations.insert(connection_id, room.clone());
        Ok(())
    }

    /// Whether some current member of `room` has exactly this display name
    pub fn name_exists(&self, name: &str, room: &RoomName) -> bool {
        self.rooms.get(room).is_some_and(|r| r.has_name(name))
    }

    /// Display name of `connection_id` within `room`
    pub fn get_name(&self, connection_id: &ConnectionId, room: &RoomName) -> Option<&DisplayName> {
        self.rooms
            .get(room)?
            .get_participant(connection_id)
            .map(|p| &p.name)
    }

    /// Remove the entry for `connection_id` wherever it is.
    ///
    /// Returns the freed name and room, or `None` if the connection was not
    /// registered. An emptied non-global room is dropped; the global room is kept.
    pub fn remove_user(&mut self, connection_id: &ConnectionId) -> Option<(DisplayName, RoomName)> {
        let room_name = self.locations.remove(connection_id)?;
        let room = self.rooms.get_mut(&room_name)?;
        let participant = room.remove_participant(connection_id)?;

        if room.is_empty() && !room.is_pinned() {
            self.rooms.remove(&room_name);
        }
        Some((participant.name, room_name))
    }

    /// Member names of `room`, sorted ascending. Empty if the room does not exist.
    pub fn list_names(&self, room: &RoomName) -> Vec<DisplayName> {
        self.rooms
            .get(room)
            .map(|r| {
                r.sorted_participants()
                    .into_iter()
                    .map(|p| p.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Member connections of `room`, in the same order as [`Self::list_names`]
    pub fn members(&self, room: &RoomName) -> Vec<ConnectionId> {
        self.rooms
            .get(room)
            .map(|r| {
                r.sorted_participants()
                    .into_iter()
                    .map(|p| p.connection_id.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn room_exists(&self, room: &RoomName) -> bool {
        self.rooms.contains_key(room)
    }

    /// Room the connection currently belongs to
    pub fn room_of(&self, connection_id: &ConnectionId) -> Option<&RoomName> {
        self.locations.get(connection_id)
    }

    /// Number of registered connections across all rooms
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
