//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::adapter::{LogLevel, LogMask};
use crate::error::{CacheError, Result};
use crate::pool::Ttl;

/// Backend selected for the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdapterKind {
    /// In-process map
    #[default]
    Memory,
    /// Stores nothing
    Null,
}

impl FromStr for AdapterKind {
    type Err = CacheError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(AdapterKind::Memory),
            "null" => Ok(AdapterKind::Null),
            other => Err(CacheError::InvalidArgument(format!(
                "Unknown cache adapter '{}'",
                other
            ))),
        }
    }
}

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend used by the pool
    pub adapter: AdapterKind,
    /// Raw pool default TTL, parsed when the pool is built
    pub default_ttl: Option<String>,
    /// Operation categories whose failures get logged
    pub log_mask: LogMask,
    /// Severity of adapter failure records
    pub log_level: LogLevel,
    /// Adapter name used in log messages instead of its type name
    pub adapter_label: Option<String>,
    /// HTTP server port
    pub server_port: u16,
    /// Expired-entry sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_ADAPTER` - `memory` or `null` (default: memory)
    /// - `DEFAULT_TTL` - Pool default TTL, e.g. `300`, `5m` (default: unset)
    /// - `LOG_MASK` - Comma list of `get`, `set`, `delete` (default: set,delete)
    /// - `LOG_LEVEL` - Severity of failure records (default: error)
    /// - `ADAPTER_LABEL` - Adapter name in failure records (default: type name)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 1)
    ///
    /// Unparsable values fall back to their defaults, except `DEFAULT_TTL`
    /// which is reported by [`Config::default_ttl`].
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            adapter: parse_var("CACHE_ADAPTER").unwrap_or(defaults.adapter),
            default_ttl: env::var("DEFAULT_TTL").ok(),
            log_mask: parse_var("LOG_MASK").unwrap_or(defaults.log_mask),
            log_level: parse_var("LOG_LEVEL").unwrap_or(defaults.log_level),
            adapter_label: env::var("ADAPTER_LABEL").ok().filter(|v| !v.is_empty()),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
        }
    }

    /// Parses the configured default TTL.
    pub fn default_ttl(&self) -> Result<Ttl> {
        match &self.default_ttl {
            Some(raw) => Ttl::parse(raw),
            None => Ok(Ttl::Unset),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adapter: AdapterKind::Memory,
            default_ttl: None,
            log_mask: LogMask::default(),
            log_level: LogLevel::default(),
            adapter_label: None,
            server_port: 3000,
            cleanup_interval: 1,
        }
    }
}
