//! Item Pool Module
//!
//! Translates item operations into adapter calls under the pool prefix.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::adapter::{CacheAdapter, StoreEntry};
use crate::error::Result;
use crate::pool::{validate_key, validate_keys, CacheItem, Expiration, Ttl, KEY_PREFIX};

// == Item Pool ==
/// Cache item pool over a pluggable adapter.
///
/// Deferred saves are staged in memory until [`commit`](ItemPool::commit).
/// The staging map is mutated through `&mut self`; share a pool between
/// threads behind a lock.
pub struct ItemPool {
    /// Backend receiving every operation
    adapter: Arc<dyn CacheAdapter>,
    /// Default TTL in seconds, resolved at construction
    default_ttl: Option<i64>,
    /// Staged writes keyed by storage key
    deferred: HashMap<String, StoreEntry>,
}

impl ItemPool {
    // == Constructor ==
    /// Creates a pool over `adapter`.
    ///
    /// `default_ttl` applies to items whose expiration was never set and is
    /// resolved once, here.
    pub fn new(adapter: Arc<dyn CacheAdapter>, default_ttl: Ttl) -> Self {
        Self {
            adapter,
            default_ttl: default_ttl.resolve(),
            deferred: HashMap::new(),
        }
    }

    /// Returns the resolved default TTL in seconds.
    pub fn default_ttl(&self) -> Option<i64> {
        self.default_ttl
    }

    // == Get Item ==
    /// Returns the stored item, or a fresh miss if none is stored.
    pub fn get_item(&self, key: &str) -> Result<CacheItem> {
        let key = validate_key(key)?;
        match self.adapter.get(&storage_key(key)) {
            Some(raw) => CacheItem::decode(&raw),
            None => Ok(CacheItem::new(key)),
        }
    }

    // == Get Items ==
    /// Returns one item per key using a single adapter read.
    ///
    /// Every key is validated before the read is issued.
    pub fn get_items<S: AsRef<str>>(&self, keys: &[S]) -> Result<HashMap<String, CacheItem>> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }
        validate_keys(keys)?;

        let storage_keys: Vec<String> = keys.iter().map(|k| storage_key(k.as_ref())).collect();
        let results = self.adapter.get_multiple(&storage_keys);

        // A short result list reads as misses for the unmatched keys.
        keys.iter()
            .zip(results.into_iter().chain(std::iter::repeat(None)))
            .map(|(key, raw)| -> Result<(String, CacheItem)> {
                let key = key.as_ref();
                let item = match raw {
                    Some(raw) => CacheItem::decode(&raw)?,
                    None => CacheItem::new(key),
                };
                Ok((key.to_string(), item))
            })
            .collect()
    }

    // == Has Item ==
    /// Checks existence without reading the value.
    pub fn has_item(&self, key: &str) -> Result<bool> {
        let key = validate_key(key)?;
        Ok(self.adapter.has(&storage_key(key)))
    }

    // == Save ==
    /// Writes the item immediately. Returns the adapter's success flag.
    pub fn save(&self, item: &CacheItem) -> Result<bool> {
        let key = validate_key(item.key())?;
        let encoded = item.encode()?;
        Ok(self
            .adapter
            .set(&storage_key(key), &encoded, self.ttl_for(item)))
    }

    // == Save Deferred ==
    /// Stages the item for the next commit, replacing any staged version.
    pub fn save_deferred(&mut self, item: &CacheItem) -> Result<bool> {
        let key = validate_key(item.key())?;
        let entry = StoreEntry::new(item.encode()?, self.ttl_for(item));
        self.deferred.insert(storage_key(key), entry);
        Ok(true)
    }

    // == Commit ==
    /// Flushes staged items with one batched adapter write.
    ///
    /// Returns true only if the adapter reports no failed key. Entries the
    /// adapter refused stay staged for a later commit.
    pub fn commit(&mut self) -> bool {
        if self.deferred.is_empty() {
            return true;
        }

        let mut staged = std::mem::take(&mut self.deferred);
        let failed = self.adapter.set_multiple(&staged);
        debug!(
            "Committed {} deferred items, {} failed",
            staged.len(),
            failed.len()
        );

        if failed.is_empty() {
            return true;
        }

        for key in failed {
            if let Some(entry) = staged.remove(&key) {
                self.deferred.insert(key, entry);
            }
        }
        false
    }

    /// Returns the number of staged items.
    pub fn deferred_len(&self) -> usize {
        self.deferred.len()
    }

    /// Drops every staged item without writing it.
    pub fn discard_deferred(&mut self) {
        self.deferred.clear();
    }

    // == Delete ==
    /// Deletes one item. Returns the adapter's success flag.
    pub fn delete_item(&self, key: &str) -> Result<bool> {
        let key = validate_key(key)?;
        Ok(self.adapter.delete(&storage_key(key)))
    }

    /// Deletes every item. Returns true only if no key failed.
    pub fn delete_items<S: AsRef<str>>(&self, keys: &[S]) -> Result<bool> {
        validate_keys(keys)?;
        let storage_keys: Vec<String> = keys.iter().map(|k| storage_key(k.as_ref())).collect();
        Ok(self.adapter.delete_multiple(&storage_keys).is_empty())
    }

    // == Clear ==
    /// Purges every entry under the pool prefix. Always reports success.
    pub fn clear(&self) -> bool {
        debug!("Purging entries under '{}'", KEY_PREFIX);
        self.adapter.purge(Some(KEY_PREFIX));
        true
    }

    fn ttl_for(&self, item: &CacheItem) -> Option<i64> {
        match item.expiration() {
            Expiration::PoolDefault => self.default_ttl,
            Expiration::Seconds(seconds) => Some(seconds),
            Expiration::Never => None,
        }
    }
}

impl fmt::Debug for ItemPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemPool")
            .field("adapter", &self.adapter.name())
            .field("default_ttl", &self.default_ttl)
            .field("deferred", &self.deferred.len())
            .finish()
    }
}

fn storage_key(key: &str) -> String {
    format!("{}{}", KEY_PREFIX, key)
}
