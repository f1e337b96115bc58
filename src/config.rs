//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

const DEFAULT_CAPACITY: usize = 1024;
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SWEEP_INTERVAL: u64 = 1;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold, fixed for the process lifetime
    pub capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Seconds between expiration sweeps
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1024)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 1)
    ///
    /// Unparseable values fall back to the default with a warning. A zero
    /// capacity is passed through and rejected when the cache is built.
    pub fn from_env() -> Self {
        Self {
            capacity: env_or("CACHE_CAPACITY", DEFAULT_CAPACITY),
            server_port: env_or("SERVER_PORT", DEFAULT_PORT),
            sweep_interval: env_or("SWEEP_INTERVAL", DEFAULT_SWEEP_INTERVAL).max(1),
        }
    }

    /// Sweep interval as a `Duration`.
    pub fn sweep_period(&self) -> Duration {
        Duration::from_secs(self.sweep_interval)
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using default", name, raw);
            default
        }),
        Err(_) => default,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            server_port: DEFAULT_PORT,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}
