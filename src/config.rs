//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;

use tracing::warn;

/// Default cache capacity.
pub const DEFAULT_CAPACITY: usize = 100;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of items the cache can hold
    pub capacity: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cached items (default: 100)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    ///
    /// Values that fail to parse fall back to the default with a warning.
    /// A negative capacity maps to zero, which startup rejects.
    pub fn from_env() -> Self {
        Self {
            capacity: parse_var::<i64>("CACHE_CAPACITY")
                .map(|n| usize::try_from(n).unwrap_or(0))
                .unwrap_or(DEFAULT_CAPACITY),
            server_port: parse_var("SERVER_PORT").unwrap_or(DEFAULT_PORT),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        warn!(var = name, value = %raw, "Ignoring unparsable value, using default");
    }
    parsed
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            server_port: DEFAULT_PORT,
        }
    }
}
