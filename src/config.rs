//! Configuration Module
//!
//! Handles loading and managing validation service configuration from environment variables.

use std::env;

use crate::baggage::EntryTtl;

/// Validation service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL applied to entry requests that don't name one
    pub default_ttl: EntryTtl,
    /// Maximum number of entries accepted in one batch request
    pub max_batch_size: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DEFAULT_ENTRY_TTL` - `UNLIMITED_PROPAGATION` or `NO_PROPAGATION`
    ///   (default: `UNLIMITED_PROPAGATION`)
    /// - `MAX_BATCH_SIZE` - Maximum entries per batch request (default: 180)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            default_ttl: env::var("DEFAULT_ENTRY_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_ttl),
            max_batch_size: env::var("MAX_BATCH_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_batch_size),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            default_ttl: EntryTtl::UnlimitedPropagation,
            // W3C baggage allows at most 180 list members per header
            max_batch_size: 180,
        }
    }
}
