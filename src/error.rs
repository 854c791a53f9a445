use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid HOST value {0:?}")]
    InvalidHost(String),

    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),

    #[error("failed to bind to {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error
    },

    #[error("server failed")]
    Serve(#[source] std::io::Error),

    #[error("lambda runtime failed: {0}")]
    Lambda(String)
}
