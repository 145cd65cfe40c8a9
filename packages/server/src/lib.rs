//! Realtime presence-and-broadcast chat server.
//!
//! Tracks which connection is in which room under which display name and
//! fans out join, leave and message events over WebSocket.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use error::ServerError;
pub use ui::run;
