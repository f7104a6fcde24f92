//! Logging Adapter Module
//!
//! Decorator that reports failed adapter operations through `tracing`
//! without altering what the wrapped adapter returns.

use std::collections::HashMap;
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{event, Level};

use crate::adapter::{CacheAdapter, StoreEntry};
use crate::error::CacheError;

/// Target of every event emitted by [`LoggingAdapter`].
pub const LOG_TARGET: &str = "item_pool::adapter";

// == Log Level ==
/// Severity used for every record a [`LoggingAdapter`] emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel {
    type Err = CacheError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(CacheError::InvalidArgument(format!(
                "Unknown log level '{}'",
                other
            ))),
        }
    }
}

// == Log Mask ==
/// Operation categories whose failures get logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogMask {
    pub get: bool,
    pub set: bool,
    pub delete: bool,
}

impl LogMask {
    pub const NONE: LogMask = LogMask {
        get: false,
        set: false,
        delete: false,
    };
    pub const GET: LogMask = LogMask {
        get: true,
        ..LogMask::NONE
    };
    pub const SET: LogMask = LogMask {
        set: true,
        ..LogMask::NONE
    };
    pub const DELETE: LogMask = LogMask {
        delete: true,
        ..LogMask::NONE
    };
    pub const ALL: LogMask = LogMask {
        get: true,
        set: true,
        delete: true,
    };

    /// Returns true if no category is enabled.
    pub fn is_empty(&self) -> bool {
        *self == LogMask::NONE
    }
}

/// Logs failed writes and deletes, not missed reads.
impl Default for LogMask {
    fn default() -> Self {
        LogMask::SET | LogMask::DELETE
    }
}

impl BitOr for LogMask {
    type Output = LogMask;

    fn bitor(self, rhs: LogMask) -> LogMask {
        LogMask {
            get: self.get || rhs.get,
            set: self.set || rhs.set,
            delete: self.delete || rhs.delete,
        }
    }
}

impl FromStr for LogMask {
    type Err = CacheError;

    /// Parses a comma separated list of `get`, `set`, `delete`, or `all` / `none`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut mask = LogMask::NONE;
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            mask = mask
                | match part.to_ascii_lowercase().as_str() {
                    "get" => LogMask::GET,
                    "set" => LogMask::SET,
                    "delete" => LogMask::DELETE,
                    "all" => LogMask::ALL,
                    "none" => LogMask::NONE,
                    other => {
                        return Err(CacheError::InvalidArgument(format!(
                            "Unknown log category '{}'",
                            other
                        )))
                    }
                };
        }
        Ok(mask)
    }
}

// == Logging Adapter ==
/// Wraps an adapter and logs the failures selected by its [`LogMask`].
///
/// Results are always returned exactly as the wrapped adapter produced them.
#[derive(Debug)]
pub struct LoggingAdapter<A> {
    inner: A,
    label: Option<String>,
    level: LogLevel,
    mask: LogMask,
}

impl<A: CacheAdapter> LoggingAdapter<A> {
    /// Wraps `inner` with the default level and mask.
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            label: None,
            level: LogLevel::default(),
            mask: LogMask::default(),
        }
    }

    /// Names the wrapped adapter in log messages instead of its type name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_mask(mut self, mask: LogMask) -> Self {
        self.mask = mask;
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn mask(&self) -> LogMask {
        self.mask
    }

    /// Returns the wrapped adapter.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    fn label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.inner.name())
    }

    fn emit(&self, message: fmt::Arguments<'_>) {
        let adapter = self.label();
        match self.level {
            LogLevel::Error => {
                event!(target: LOG_TARGET, Level::ERROR, adapter = %adapter, "{}", message)
            }
            LogLevel::Warn => {
                event!(target: LOG_TARGET, Level::WARN, adapter = %adapter, "{}", message)
            }
            LogLevel::Info => {
                event!(target: LOG_TARGET, Level::INFO, adapter = %adapter, "{}", message)
            }
            LogLevel::Debug => {
                event!(target: LOG_TARGET, Level::DEBUG, adapter = %adapter, "{}", message)
            }
            LogLevel::Trace => {
                event!(target: LOG_TARGET, Level::TRACE, adapter = %adapter, "{}", message)
            }
        }
    }
}

impl<A: CacheAdapter> CacheAdapter for LoggingAdapter<A> {
    fn name(&self) -> &str {
        self.label()
    }

    fn get(&self, key: &str) -> Option<String> {
        let result = self.inner.get(key);
        if self.mask.get && result.is_none() {
            self.emit(format_args!(
                "Cache key '{}' cannot be reached over '{}' adapter",
                key,
                self.label()
            ));
        }
        result
    }

    fn get_multiple(&self, keys: &[String]) -> Vec<Option<String>> {
        let results = self.inner.get_multiple(keys);
        if !self.mask.get {
            return results;
        }

        let missed: Vec<&str> = keys
            .iter()
            .enumerate()
            .filter(|(index, _)| results.get(*index).map_or(true, Option::is_none))
            .map(|(_, key)| key.as_str())
            .collect();
        if !missed.is_empty() {
            self.emit(format_args!(
                "Cache keys '{}' cannot be reached over '{}' adapter",
                missed.join(", "),
                self.label()
            ));
        }
        results
    }

    fn set(&self, key: &str, value: &str, ttl: Option<i64>) -> bool {
        let result = self.inner.set(key, value, ttl);
        if self.mask.set && !result {
            self.emit(format_args!(
                "Cache key '{}' cannot be set into cache via '{}' adapter",
                key,
                self.label()
            ));
        }
        result
    }

    fn set_multiple(&self, entries: &HashMap<String, StoreEntry>) -> Vec<String> {
        let failed = self.inner.set_multiple(entries);
        if self.mask.set && !failed.is_empty() {
            self.emit(format_args!(
                "Cache keys '{}' cannot be set into cache via '{}' adapter",
                failed.join(", "),
                self.label()
            ));
        }
        failed
    }

    fn delete(&self, key: &str) -> bool {
        let result = self.inner.delete(key);
        if self.mask.delete && !result {
            self.emit(format_args!(
                "Cache key '{}' cannot be deleted from cache via '{}' adapter",
                key,
                self.label()
            ));
        }
        result
    }

    fn delete_multiple(&self, keys: &[String]) -> Vec<String> {
        let failed = self.inner.delete_multiple(keys);
        if self.mask.delete && !failed.is_empty() {
            self.emit(format_args!(
                "Cache keys '{}' cannot be deleted from cache via '{}' adapter",
                failed.join(", "),
                self.label()
            ));
        }
        failed
    }

    fn has(&self, key: &str) -> bool {
        self.inner.has(key)
    }

    fn purge(&self, pattern: Option<&str>) {
        self.inner.purge(pattern)
    }
}
