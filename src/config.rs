//! Connection configuration
//!
//! Describes where the store lives and how large the connection pool may
//! grow. Can be deserialized (JSON file) or read from the environment.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Connections per CPU when `pool_size` is left at zero
const CONNECTIONS_PER_CPU: usize = 10;

/// Client configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server address (host:port)
    pub addr: String,

    /// Password sent with AUTH, empty for none
    pub password: String,

    /// Logical database index
    pub db: i64,

    /// Maximum number of pooled connections (0 = default)
    pub pool_size: usize,

    /// Upper bound on the construction health check, in milliseconds
    pub dial_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            addr: "127.0.0.1:6379".to_string(),
            password: String::new(),
            db: 0,
            pool_size: 0,
            dial_timeout_ms: 5_000,
        }
    }
}

impl Config {
    /// Create a configuration for the given address, other fields defaulted
    pub fn new(addr: impl Into<String>) -> Self {
        Config {
            addr: addr.into(),
            ..Config::default()
        }
    }

    /// Parse a configuration from JSON
    ///
    /// Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(format!("invalid JSON: {}", e)))
    }

    /// Read the configuration from `REDIS_*` environment variables
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(addr) = env::var("REDIS_ADDR") {
            config.addr = addr;
        }
        if let Ok(password) = env::var("REDIS_PASSWORD") {
            config.password = password;
        }
        if let Some(db) = parse_env("REDIS_DB")? {
            config.db = db;
        }
        if let Some(pool_size) = parse_env("REDIS_POOL_SIZE")? {
            config.pool_size = pool_size;
        }
        if let Some(timeout) = parse_env("REDIS_DIAL_TIMEOUT_MS")? {
            config.dial_timeout_ms = timeout;
        }

        Ok(config)
    }

    /// Check the configuration before opening anything
    pub fn validate(&self) -> Result<()> {
        if self.addr.trim().is_empty() {
            return Err(Error::Config("address must not be empty".to_string()));
        }

        if self.db < 0 {
            return Err(Error::Config(format!(
                "database index must be non-negative, got {}",
                self.db
            )));
        }

        Ok(())
    }

    /// Pool size actually used
    pub fn effective_pool_size(&self) -> usize {
        if self.pool_size == 0 {
            CONNECTIONS_PER_CPU * num_cpus::get()
        } else {
            self.pool_size
        }
    }

    /// Health check bound
    pub fn dial_timeout(&self) -> Duration {
        Duration::from_millis(self.dial_timeout_ms)
    }

    /// Build the `redis://` URL for this configuration
    ///
    /// The password is percent-encoded.
    pub fn redis_url(&self) -> Result<Url> {
        let mut url = Url::parse(&format!("redis://{}/{}", self.addr.trim(), self.db))
            .map_err(|e| Error::Config(format!("invalid address '{}': {}", self.addr, e)))?;

        if url.host_str().map(str::is_empty).unwrap_or(true) {
            return Err(Error::Config(format!("missing host in address '{}'", self.addr)));
        }

        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|_| Error::Config(format!("cannot attach password to '{}'", self.addr)))?;
        }

        Ok(url)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() { "" } else { "***" };
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("password", &password)
            .field("db", &self.db)
            .field("pool_size", &self.pool_size)
            .field("dial_timeout_ms", &self.dial_timeout_ms)
            .finish()
    }
}

/// Read and parse one environment variable
fn parse_env<T: FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("{}: {}", name, e))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.addr, "127.0.0.1:6379");
        assert_eq!(config.db, 0);
        assert_eq!(config.dial_timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_pool_size_scales_with_cpus() {
        let config = Config::default();
        assert_eq!(config.effective_pool_size(), CONNECTIONS_PER_CPU * num_cpus::get());

        let config = Config {
            pool_size: 3,
            ..Config::default()
        };
        assert_eq!(config.effective_pool_size(), 3);
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{"addr": "cache:6380", "db": 2, "pool_size": 8}"#).unwrap();
        assert_eq!(config.addr, "cache:6380");
        assert_eq!(config.db, 2);
        assert_eq!(config.pool_size, 8);
        assert_eq!(config.password, "");
        assert_eq!(config.dial_timeout_ms, 5_000);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(Config::from_json("{addr"), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(Config::new("").validate().is_err());

        let config = Config {
            db: -1,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_url_without_password() {
        let config = Config {
            db: 3,
            ..Config::new("localhost:6379")
        };
        assert_eq!(config.redis_url().unwrap().as_str(), "redis://localhost:6379/3");
    }

    #[test]
    fn test_url_encodes_password() {
        let config = Config {
            password: "p@ss/word".to_string(),
            ..Config::new("localhost:6379")
        };
        let url = config.redis_url().unwrap();
        assert_eq!(url.password(), Some("p%40ss%2Fword"));
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(6379));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = Config {
            password: "hunter2".to_string(),
            ..Config::default()
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("***"));
    }
}
