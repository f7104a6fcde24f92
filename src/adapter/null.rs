//! Null Adapter Module
//!
//! Backend that stores nothing. Every read misses and every write fails.

use std::collections::HashMap;

use crate::adapter::{CacheAdapter, StoreEntry};

/// Adapter that never holds a value.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCacheAdapter;

impl NullCacheAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl CacheAdapter for NullCacheAdapter {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn get_multiple(&self, keys: &[String]) -> Vec<Option<String>> {
        vec![None; keys.len()]
    }

    fn set(&self, _key: &str, _value: &str, _ttl: Option<i64>) -> bool {
        false
    }

    fn set_multiple(&self, entries: &HashMap<String, StoreEntry>) -> Vec<String> {
        entries.keys().cloned().collect()
    }

    fn delete(&self, _key: &str) -> bool {
        false
    }

    fn delete_multiple(&self, keys: &[String]) -> Vec<String> {
        keys.to_vec()
    }

    fn has(&self, _key: &str) -> bool {
        false
    }

    fn purge(&self, _pattern: Option<&str>) {}
}
