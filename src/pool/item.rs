//! Cache Item Module
//!
//! Defines the value object handed out and accepted by the item pool.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::pool::ttl::{resolve, Ttl};

// == Expiration ==
/// Expiration state carried by an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expiration {
    /// Not set explicitly; the pool default applies on save
    #[default]
    PoolDefault,
    /// Resolved number of seconds, may be zero or negative
    Seconds(i64),
    /// Never expires
    Never,
}

// == Cache Item ==
/// A single cache entry as seen by pool callers.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheItem {
    key: String,
    value: Option<Value>,
    is_hit: bool,
    expiration: Expiration,
}

#[derive(Serialize)]
struct EncodedItemRef<'a> {
    key: &'a str,
    value: &'a Option<Value>,
    expiration: Expiration,
}

#[derive(Deserialize)]
struct EncodedItem {
    key: String,
    value: Option<Value>,
    expiration: Expiration,
}

impl CacheItem {
    // == Constructor ==
    /// Creates a fresh item that did not come from the backend.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            is_hit: false,
            expiration: Expiration::PoolDefault,
        }
    }

    /// Returns the item key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns true when the item was read from the backend.
    pub fn is_hit(&self) -> bool {
        self.is_hit
    }

    /// Returns the raw stored value, if any.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    // == Typed Access ==
    /// Deserializes the stored value into `T`.
    pub fn get<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match &self.value {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Serializes `value` and stores it in the item.
    pub fn set<T: Serialize>(&mut self, value: T) -> Result<&mut Self> {
        self.value = Some(serde_json::to_value(value)?);
        Ok(self)
    }

    /// Stores an already serialized value.
    pub fn set_value(&mut self, value: Value) -> &mut Self {
        self.value = Some(value);
        self
    }

    // == Expiration ==
    /// Returns the expiration state.
    pub fn expiration(&self) -> Expiration {
        self.expiration
    }

    /// Expires the item at the given time, or never with `None`.
    pub fn expires_at(&mut self, at: Option<DateTime<Utc>>) -> &mut Self {
        self.expiration = match at {
            Some(at) => Expiration::Seconds(resolve(&Ttl::At(at)).unwrap_or_default()),
            None => Expiration::Never,
        };
        self
    }

    /// Expires the item after the given TTL. `Ttl::Unset` means never.
    pub fn expires_after(&mut self, ttl: Ttl) -> &mut Self {
        self.expiration = match resolve(&ttl) {
            Some(seconds) => Expiration::Seconds(seconds),
            None => Expiration::Never,
        };
        self
    }

    /// Falls back to the pool default expiration.
    pub fn use_default_expiration(&mut self) -> &mut Self {
        self.expiration = Expiration::PoolDefault;
        self
    }

    // == Encoding ==
    /// Encodes the item into its stored representation.
    pub fn encode(&self) -> Result<String> {
        let encoded = EncodedItemRef {
            key: &self.key,
            value: &self.value,
            expiration: self.expiration,
        };
        Ok(serde_json::to_string(&encoded)?)
    }

    /// Decodes a stored representation. Decoded items are always hits.
    pub fn decode(raw: &str) -> Result<Self> {
        let encoded: EncodedItem = serde_json::from_str(raw)?;
        Ok(Self {
            key: encoded.key,
            value: encoded.value,
            is_hit: true,
            expiration: encoded.expiration,
        })
    }
}
