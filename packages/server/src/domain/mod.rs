//! Domain layer for the chat application.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod registry;
pub mod repository;
pub mod value_object;

pub use entity::{Participant, Room};
pub use error::{RegistryError, ValueObjectError};
pub use factory::ConnectionIdFactory;
pub use registry::PresenceRegistry;
pub use repository::{Departure, Membership, PresenceRepository, RoomSnapshot};
pub use value_object::{ConnectionId, DisplayName, GLOBAL_ROOM, MessageText, RoomName};
