//! Response DTOs for the item pool API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::pool::CacheItem;

/// Response body describing one item (GET /items/:key)
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    /// The item key
    pub key: String,
    /// Whether the item was found in the backend
    pub hit: bool,
    /// The stored value, null on a miss
    pub value: Option<Value>,
}

impl From<&CacheItem> for ItemResponse {
    fn from(item: &CacheItem) -> Self {
        Self {
            key: item.key().to_string(),
            hit: item.is_hit(),
            value: item.value().cloned(),
        }
    }
}

/// Response body for a batch lookup (POST /items/lookup)
#[derive(Debug, Clone, Serialize)]
pub struct ItemsResponse {
    pub items: HashMap<String, ItemResponse>,
}

impl ItemsResponse {
    pub fn new(items: &HashMap<String, CacheItem>) -> Self {
        Self {
            items: items
                .iter()
                .map(|(key, item)| (key.clone(), ItemResponse::from(item)))
                .collect(),
        }
    }
}

/// Response body for an existence check (GET /items/:key/exists)
#[derive(Debug, Clone, Serialize)]
pub struct ExistsResponse {
    pub key: String,
    pub exists: bool,
}

impl ExistsResponse {
    pub fn new(key: impl Into<String>, exists: bool) -> Self {
        Self {
            key: key.into(),
            exists,
        }
    }
}

/// Response body for a save (PUT /items)
#[derive(Debug, Clone, Serialize)]
pub struct SaveResponse {
    /// The key that was saved or staged
    pub key: String,
    /// Adapter success flag, always true for staged saves
    pub saved: bool,
    /// Whether the item waits for the next commit
    pub deferred: bool,
}

impl SaveResponse {
    pub fn new(key: impl Into<String>, saved: bool, deferred: bool) -> Self {
        Self {
            key: key.into(),
            saved,
            deferred,
        }
    }
}

/// Response body for a commit (POST /commit)
#[derive(Debug, Clone, Serialize)]
pub struct CommitResponse {
    /// True only if every staged item was written
    pub committed: bool,
    /// Items still staged after the commit
    pub pending: usize,
}

/// Response body for single and batch deletes
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// Response body for a clear (POST /clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub cleared: bool,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
