//! Item Pool - cache access over pluggable adapters
//!
//! Provides an item pool with key validation, TTL resolution and deferred
//! batched writes, plus an adapter decorator logging failed operations.

pub mod adapter;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pool;
pub mod simple;
pub mod tasks;

#[cfg(test)]
mod test_support;

pub use adapter::{CacheAdapter, LogLevel, LogMask, LoggingAdapter};
pub use api::AppState;
pub use config::Config;
pub use error::{CacheError, Result};
pub use pool::{CacheItem, ItemPool, Ttl};
pub use simple::SimpleCache;
pub use tasks::{spawn_cleanup_task, stop_cleanup_task};
