//! In-Memory Adapter Module
//!
//! Process-local backend keeping raw values in a HashMap.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::adapter::{CacheAdapter, StoreEntry, StoredValue};

// == Memory Cache Adapter ==
/// Stores raw values in process memory.
///
/// Expired values are skipped on read and removed by [`cleanup_expired`].
///
/// [`cleanup_expired`]: MemoryCacheAdapter::cleanup_expired
#[derive(Debug, Default)]
pub struct MemoryCacheAdapter {
    entries: RwLock<HashMap<String, StoredValue>>,
}

impl MemoryCacheAdapter {
    // == Constructor ==
    /// Creates an empty adapter.
    pub fn new() -> Self {
        Self::default()
    }

    // == Cleanup Expired ==
    /// Removes all expired values.
    ///
    /// Returns the number of values removed.
    pub fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, stored| !stored.is_expired());
        before - entries.len()
    }

    // == Length ==
    /// Returns the number of held values, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if no value is held.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn live_value(entries: &HashMap<String, StoredValue>, key: &str) -> Option<String> {
        entries
            .get(key)
            .filter(|stored| !stored.is_expired())
            .map(|stored| stored.value.clone())
    }
}

impl CacheAdapter for MemoryCacheAdapter {
    fn get(&self, key: &str) -> Option<String> {
        Self::live_value(&self.entries.read(), key)
    }

    fn get_multiple(&self, keys: &[String]) -> Vec<Option<String>> {
        let entries = self.entries.read();
        keys.iter()
            .map(|key| Self::live_value(&entries, key))
            .collect()
    }

    fn set(&self, key: &str, value: &str, ttl: Option<i64>) -> bool {
        self.entries
            .write()
            .insert(key.to_string(), StoredValue::new(value.to_string(), ttl));
        true
    }

    fn set_multiple(&self, values: &HashMap<String, StoreEntry>) -> Vec<String> {
        let mut entries = self.entries.write();
        for (key, entry) in values {
            entries.insert(key.clone(), StoredValue::new(entry.value.clone(), entry.ttl));
        }
        Vec::new()
    }

    fn delete(&self, key: &str) -> bool {
        self.entries
            .write()
            .remove(key)
            .is_some_and(|stored| !stored.is_expired())
    }

    fn delete_multiple(&self, keys: &[String]) -> Vec<String> {
        let mut entries = self.entries.write();
        keys.iter()
            .filter(|key| {
                !entries
                    .remove(key.as_str())
                    .is_some_and(|stored| !stored.is_expired())
            })
            .cloned()
            .collect()
    }

    fn has(&self, key: &str) -> bool {
        self.entries
            .read()
            .get(key)
            .is_some_and(|stored| !stored.is_expired())
    }

    fn purge(&self, pattern: Option<&str>) {
        let mut entries = self.entries.write();
        match pattern {
            Some(prefix) => entries.retain(|key, _| !key.starts_with(prefix)),
            None => entries.clear(),
        }
    }
}
