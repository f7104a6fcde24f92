//! Simple Cache Module
//!
//! Plain key/value facade over a cache adapter, for callers that do not need
//! items, hit flags or deferred writes.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapter::{CacheAdapter, StoreEntry};
use crate::error::Result;
use crate::pool::{validate_key, validate_keys, Ttl};

/// Prefix namespacing every entry written by a [`SimpleCache`]
pub const SIMPLE_KEY_PREFIX: &str = "simple_cache_";

// == Simple Cache ==
/// Key/value cache storing JSON encoded values.
pub struct SimpleCache {
    adapter: Arc<dyn CacheAdapter>,
    default_ttl: Option<i64>,
}

impl SimpleCache {
    /// Creates a cache over `adapter`; `default_ttl` applies when a write
    /// passes `Ttl::Unset`.
    pub fn new(adapter: Arc<dyn CacheAdapter>, default_ttl: Ttl) -> Self {
        Self {
            adapter,
            default_ttl: default_ttl.resolve(),
        }
    }

    // == Get ==
    /// Returns the stored value, or `default` on a miss.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T> {
        let key = validate_key(key)?;
        match self.adapter.get(&storage_key(key)) {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(default),
        }
    }

    /// Returns one value per key, `default` standing in for misses.
    pub fn get_multiple<T, S>(&self, keys: &[S], default: T) -> Result<HashMap<String, T>>
    where
        T: DeserializeOwned + Clone,
        S: AsRef<str>,
    {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }
        validate_keys(keys)?;

        let storage_keys: Vec<String> = keys.iter().map(|k| storage_key(k.as_ref())).collect();
        let results = self.adapter.get_multiple(&storage_keys);

        // A short result list reads as misses for the unmatched keys.
        keys.iter()
            .zip(results.into_iter().chain(std::iter::repeat(None)))
            .map(|(key, raw)| -> Result<(String, T)> {
                let value = match raw {
                    Some(raw) => serde_json::from_str(&raw)?,
                    None => default.clone(),
                };
                Ok((key.as_ref().to_string(), value))
            })
            .collect()
    }

    // == Set ==
    /// Stores a value. Returns the adapter's success flag.
    pub fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Ttl) -> Result<bool> {
        let key = validate_key(key)?;
        let encoded = serde_json::to_string(value)?;
        Ok(self
            .adapter
            .set(&storage_key(key), &encoded, self.ttl_or_default(&ttl)))
    }

    /// Stores every value in one batch. Returns true only if no key failed.
    pub fn set_multiple<T: Serialize>(&self, values: &HashMap<String, T>, ttl: Ttl) -> Result<bool> {
        let ttl = self.ttl_or_default(&ttl);
        let mut entries = HashMap::with_capacity(values.len());
        for (key, value) in values {
            let key = validate_key(key)?;
            entries.insert(
                storage_key(key),
                StoreEntry::new(serde_json::to_string(value)?, ttl),
            );
        }
        if entries.is_empty() {
            return Ok(true);
        }
        Ok(self.adapter.set_multiple(&entries).is_empty())
    }

    // == Delete ==
    pub fn delete(&self, key: &str) -> Result<bool> {
        let key = validate_key(key)?;
        Ok(self.adapter.delete(&storage_key(key)))
    }

    /// Deletes every key. Returns true only if no key failed.
    pub fn delete_multiple<S: AsRef<str>>(&self, keys: &[S]) -> Result<bool> {
        validate_keys(keys)?;
        let storage_keys: Vec<String> = keys.iter().map(|k| storage_key(k.as_ref())).collect();
        Ok(self.adapter.delete_multiple(&storage_keys).is_empty())
    }

    // == Has ==
    pub fn has(&self, key: &str) -> Result<bool> {
        let key = validate_key(key)?;
        Ok(self.adapter.has(&storage_key(key)))
    }

    // == Clear ==
    /// Purges every entry under the simple cache prefix.
    pub fn clear(&self) -> bool {
        self.adapter.purge(Some(SIMPLE_KEY_PREFIX));
        true
    }

    fn ttl_or_default(&self, ttl: &Ttl) -> Option<i64> {
        ttl.resolve().or(self.default_ttl)
    }
}

impl fmt::Debug for SimpleCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleCache")
            .field("adapter", &self.adapter.name())
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}

fn storage_key(key: &str) -> String {
    format!("{}{}", SIMPLE_KEY_PREFIX, key)
}
