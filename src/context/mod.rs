//! Call context module
//!
//! A `Context` carries an optional cancellation signal and an optional
//! deadline. Every forwarded command runs under exactly one context.
//! This module knows nothing about Redis (loose coupling).

mod types;

pub use types::{Context, ContextError};
pub use tokio_util::sync::CancellationToken;
