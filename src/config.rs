//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the result cache can hold
    pub max_entries: usize,
    /// Largest payload, in bytes, the cache (and capture buffer) accepts
    pub max_item_bytes: usize,
    /// Entry lifetime in seconds
    pub entry_ttl: u64,
    /// Background sweep interval in seconds
    pub sweep_interval: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Upstream fetch timeout in seconds
    pub fetch_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 50)
    /// - `MAX_ITEM_BYTES` - Per-item payload cap in bytes (default: 8 MiB)
    /// - `ENTRY_TTL` - Entry lifetime in seconds (default: 3600)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 1)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `FETCH_TIMEOUT` - Upstream fetch timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            max_entries: env::var("MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            max_item_bytes: env::var("MAX_ITEM_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8 * 1024 * 1024),
            entry_ttl: env::var("ENTRY_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            fetch_timeout: env::var("FETCH_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 50,
            max_item_bytes: 8 * 1024 * 1024,
            entry_ttl: 3600,
            sweep_interval: 1,
            server_port: 3000,
            fetch_timeout: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_entries, 50);
        assert_eq!(config.max_item_bytes, 8 * 1024 * 1024);
        assert_eq!(config.entry_ttl, 3600);
        assert_eq!(config.sweep_interval, 1);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.fetch_timeout, 30);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("MAX_ENTRIES");
        env::remove_var("MAX_ITEM_BYTES");
        env::remove_var("ENTRY_TTL");
        env::remove_var("SWEEP_INTERVAL");
        env::remove_var("SERVER_PORT");
        env::remove_var("FETCH_TIMEOUT");

        let config = Config::from_env();
        assert_eq!(config.max_entries, 50);
        assert_eq!(config.max_item_bytes, 8 * 1024 * 1024);
        assert_eq!(config.entry_ttl, 3600);
        assert_eq!(config.sweep_interval, 1);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.fetch_timeout, 30);
    }
}
