//! ferrum-ctx - Redis client with per-call cancellation and deadlines
//!
//! ferrum-ctx keeps the same separation of concerns as the rest of the
//! Ferrum family:
//! - `context` knows about cancellation and deadlines, nothing else
//! - `config` describes where the store lives
//! - `client` forwards commands to the pooled Redis client under a context
//!
//! ```no_run
//! use ferrum_ctx::{Client, Config, Context};
//! use std::time::Duration;
//!
//! # async fn demo() -> ferrum_ctx::Result<()> {
//! let client = Client::connect(&Config::new("127.0.0.1:6379")).await?;
//!
//! // Background context: never canceled, no deadline
//! let _: () = client.set("greeting", "hello").await?;
//!
//! // Bound context: every call through `bounded` gives up after 50ms
//! let bounded = client.with_context(Context::background().with_timeout(Duration::from_millis(50)));
//! let greeting: Option<String> = bounded.get("greeting").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod context;
pub mod error;

/// Re-export commonly used types
pub use client::Client;
pub use config::Config;
pub use context::{CancellationToken, Context, ContextError};
pub use error::{Error, Result};

/// The underlying client crate, for argument and reply types
pub use redis;
