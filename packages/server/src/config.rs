//! Server configuration from command-line flags and environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Agora chat server
#[derive(Debug, Clone, Parser)]
#[command(name = "agora-server", version, about)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "AGORA_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "AGORA_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "AGORA_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
