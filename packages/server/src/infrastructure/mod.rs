//! Infrastructure layer: storage and transport adapters.

pub mod dto;
pub mod hub;
pub mod repository;

pub use hub::ConnectionHub;
