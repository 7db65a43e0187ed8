//! Error types

use crate::context::ContextError;
use deadpool_redis::PoolError;
use redis::RedisError;
use thiserror::Error;

/// Boxed cause carried by [`Error::Connection`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the client
///
/// Only `Connection` and `Config` originate here. The other variants carry
/// the underlying client's error or the context's verdict unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// The construction health check failed
    #[error("cannot reach redis at {addr}: {source}")]
    Connection {
        addr: String,
        #[source]
        source: BoxError,
    },

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Error reported by the store
    #[error(transparent)]
    Redis(#[from] RedisError),

    /// No pooled connection could be obtained
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// The governing context was canceled or expired
    #[error(transparent)]
    Context(#[from] ContextError),
}
