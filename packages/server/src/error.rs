//! Server-level error definitions.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind the listening socket
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server terminated with an I/O error
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
