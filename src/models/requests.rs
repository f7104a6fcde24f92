//! Request DTOs for the item pool API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::pool::{CacheItem, Ttl};

/// Request body for saving an item (PUT /items)
///
/// # Fields
/// - `key`: The item key
/// - `value`: Any JSON value to store
/// - `ttl`: Optional TTL: seconds, RFC 3339 time or duration string
/// - `deferred`: Stage the item until the next commit instead of writing it
#[derive(Debug, Clone, Deserialize)]
pub struct SaveItemRequest {
    pub key: String,
    pub value: Value,
    #[serde(default)]
    pub ttl: Value,
    #[serde(default)]
    pub deferred: bool,
}

impl SaveItemRequest {
    /// Builds the item to save.
    ///
    /// Without a TTL the pool default applies.
    pub fn to_item(&self) -> Result<CacheItem> {
        let ttl = Ttl::try_from(&self.ttl)?;
        let mut item = CacheItem::new(self.key.clone());
        item.set_value(self.value.clone());
        if ttl != Ttl::Unset {
            item.expires_after(ttl);
        }
        Ok(item)
    }
}

/// Request body carrying a list of keys (POST /items/lookup, POST /items/delete)
#[derive(Debug, Clone, Deserialize)]
pub struct KeysRequest {
    pub keys: Vec<String>,
}
