//! Pool Module
//!
//! Item pool layering key validation, TTL resolution and deferred writes
//! over any cache adapter.

mod item;
mod item_pool;
mod key;
mod ttl;


// Re-export public types
pub use item::{CacheItem, Expiration};
pub use item_pool::ItemPool;
pub use key::{validate_key, validate_keys};
pub use ttl::{resolve, Ttl};

// == Public Constants ==
/// Maximum allowed key length in characters
pub const MAX_KEY_LENGTH: usize = 64;

/// Punctuation accepted in keys besides `_` and `.`
pub const RESERVED_CHARACTERS: &str = "{}()/\\@:";

/// Prefix namespacing every entry written by an [`ItemPool`]
pub const KEY_PREFIX: &str = "pool_item_";
