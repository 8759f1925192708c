//! HTTP server configuration object.

use std::net::SocketAddr;

/// Settings the server needs before it can bind.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
