//! Stored Value Module
//!
//! A raw value held by the in-memory adapter, with its expiration time.

use std::time::{SystemTime, UNIX_EPOCH};

// == Stored Value ==
/// Raw encoded value plus expiration metadata.
#[derive(Debug, Clone)]
pub struct StoredValue {
    /// The stored raw value
    pub value: String,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<i64>,
}

impl StoredValue {
    // == Constructor ==
    /// Creates a stored value expiring `ttl_seconds` from now.
    ///
    /// A TTL of zero or less produces a value that is already expired.
    pub fn new(value: String, ttl_seconds: Option<i64>) -> Self {
        let now = current_timestamp_ms();
        let expires_at = ttl_seconds.map(|ttl| now.saturating_add(ttl.saturating_mul(1000)));

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the value has expired.
    ///
    /// A value is expired once the current time reaches its expiration time.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or_default()
}
