//! Error types for configuration and server startup

use std::net::SocketAddr;

pub type Result<T> = std::result::Result<T, KageError>;

#[derive(Debug, thiserror::Error)]
pub enum KageError {
    /// PORT was set but empty, or set to zero
    #[error("Port is not set in the environment variables")]
    PortNotSet,

    /// Listener could not be bound
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Accept loop terminated with an IO error
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

impl KageError {
    /// Create a bind error for `addr`
    pub fn bind(addr: SocketAddr, source: std::io::Error) -> Self {
        KageError::Bind { addr, source }
    }
}
