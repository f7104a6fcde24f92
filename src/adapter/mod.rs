//! Adapter Module
//!
//! The raw key/value contract every cache backend implements, the backends
//! shipped with the crate, and the failure-logging decorator.

mod entry;
mod logging;
mod memory;
mod null;

use std::collections::HashMap;
use std::sync::Arc;

pub use entry::StoredValue;
pub use logging::{LogLevel, LogMask, LoggingAdapter, LOG_TARGET};
pub use memory::MemoryCacheAdapter;
pub use null::NullCacheAdapter;

// == Store Entry ==
/// One value handed to [`CacheAdapter::set_multiple`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEntry {
    /// Encoded value
    pub value: String,
    /// TTL in seconds, None = no expiration
    pub ttl: Option<i64>,
}

impl StoreEntry {
    pub fn new(value: impl Into<String>, ttl: Option<i64>) -> Self {
        Self {
            value: value.into(),
            ttl,
        }
    }
}

// == Cache Adapter ==
/// Raw string storage contract.
///
/// Batch writes and deletes report the keys that failed; an empty list means
/// every key succeeded. A TTL of zero or less means the value is already
/// expired. Implementations handle their own synchronization.
pub trait CacheAdapter: Send + Sync {
    /// Identity used in diagnostics. Defaults to the Rust type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Returns the stored value, or None if absent or expired.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns one result per key, in the order of `keys`.
    fn get_multiple(&self, keys: &[String]) -> Vec<Option<String>>;

    /// Stores a value. Returns true on success.
    fn set(&self, key: &str, value: &str, ttl: Option<i64>) -> bool;

    /// Stores every entry. Returns the keys that failed.
    fn set_multiple(&self, entries: &HashMap<String, StoreEntry>) -> Vec<String>;

    /// Removes a value. Returns true if it was removed.
    fn delete(&self, key: &str) -> bool;

    /// Removes every key. Returns the keys that failed.
    fn delete_multiple(&self, keys: &[String]) -> Vec<String>;

    /// Returns true if a live value exists for the key.
    fn has(&self, key: &str) -> bool;

    /// Removes all keys starting with `pattern`, or everything with None.
    fn purge(&self, pattern: Option<&str>);
}

// == Forwarding Implementations ==
macro_rules! forward_adapter {
    ($wrapper:ty) => {
        impl<T: CacheAdapter + ?Sized> CacheAdapter for $wrapper {
            fn name(&self) -> &str {
                (**self).name()
            }

            fn get(&self, key: &str) -> Option<String> {
                (**self).get(key)
            }

            fn get_multiple(&self, keys: &[String]) -> Vec<Option<String>> {
                (**self).get_multiple(keys)
            }

            fn set(&self, key: &str, value: &str, ttl: Option<i64>) -> bool {
                (**self).set(key, value, ttl)
            }

            fn set_multiple(&self, entries: &HashMap<String, StoreEntry>) -> Vec<String> {
                (**self).set_multiple(entries)
            }

            fn delete(&self, key: &str) -> bool {
                (**self).delete(key)
            }

            fn delete_multiple(&self, keys: &[String]) -> Vec<String> {
                (**self).delete_multiple(keys)
            }

            fn has(&self, key: &str) -> bool {
                (**self).has(key)
            }

            fn purge(&self, pattern: Option<&str>) {
                (**self).purge(pattern)
            }
        }
    };
}

forward_adapter!(Arc<T>);
forward_adapter!(Box<T>);
