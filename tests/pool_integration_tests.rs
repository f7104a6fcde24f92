//! Integration Tests for the Pool and Adapter Stack
//!
//! Exercises the public library surface against in-memory, null and
//! custom adapters.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use item_pool::adapter::{MemoryCacheAdapter, NullCacheAdapter, StoreEntry};
use item_pool::{
    CacheAdapter, CacheError, CacheItem, ItemPool, LogLevel, LogMask, LoggingAdapter,
    SimpleCache, Ttl,
};
use parking_lot::Mutex;

// == Helper Adapters ==

/// Memory adapter that refuses writes for a fixed set of keys and records
/// every TTL it receives.
#[derive(Default)]
struct SelectiveAdapter {
    inner: MemoryCacheAdapter,
    refused: HashSet<String>,
    ttls: Mutex<HashMap<String, Option<i64>>>,
}

impl SelectiveAdapter {
    fn refusing(keys: &[&str]) -> Self {
        Self {
            refused: keys.iter().map(|k| k.to_string()).collect(),
            ..Self::default()
        }
    }

    fn ttl_of(&self, key: &str) -> Option<Option<i64>> {
        self.ttls.lock().get(key).copied()
    }
}

impl CacheAdapter for SelectiveAdapter {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn get_multiple(&self, keys: &[String]) -> Vec<Option<String>> {
        self.inner.get_multiple(keys)
    }

    fn set(&self, key: &str, value: &str, ttl: Option<i64>) -> bool {
        if self.refused.contains(key) {
            return false;
        }
        self.ttls.lock().insert(key.to_string(), ttl);
        self.inner.set(key, value, ttl)
    }

    fn set_multiple(&self, entries: &HashMap<String, StoreEntry>) -> Vec<String> {
        entries
            .iter()
            .filter(|(key, entry)| !self.set(key, &entry.value, entry.ttl))
            .map(|(key, _)| key.clone())
            .collect()
    }

    fn delete(&self, key: &str) -> bool {
        self.inner.delete(key)
    }

    fn delete_multiple(&self, keys: &[String]) -> Vec<String> {
        self.inner.delete_multiple(keys)
    }

    fn has(&self, key: &str) -> bool {
        self.inner.has(key)
    }

    fn purge(&self, pattern: Option<&str>) {
        self.inner.purge(pattern)
    }
}

fn item(key: &str, value: serde_json::Value) -> CacheItem {
    let mut item = CacheItem::new(key);
    item.set_value(value);
    item
}

// == Pool Tests ==

#[test]
fn test_pool_stores_under_prefixed_keys() {
    let memory = Arc::new(MemoryCacheAdapter::new());
    let pool = ItemPool::new(memory.clone(), Ttl::Unset);

    assert!(pool.save(&item("foo", serde_json::json!("bar"))).unwrap());

    assert!(memory.has("pool_item_foo"));
    assert!(!memory.has("foo"));
}

#[test]
fn test_pool_default_ttl_reaches_adapter() {
    let adapter = Arc::new(SelectiveAdapter::default());
    let pool = ItemPool::new(adapter.clone(), Ttl::Seconds(300));

    pool.save(&item("defaulted", serde_json::json!(1))).unwrap();

    let mut never = item("never", serde_json::json!(2));
    never.expires_at(None);
    pool.save(&never).unwrap();

    let mut explicit = item("explicit", serde_json::json!(3));
    explicit.expires_after(Ttl::Seconds(5));
    pool.save(&explicit).unwrap();

    assert_eq!(adapter.ttl_of("pool_item_defaulted"), Some(Some(300)));
    assert_eq!(adapter.ttl_of("pool_item_never"), Some(None));
    assert_eq!(adapter.ttl_of("pool_item_explicit"), Some(Some(5)));
}

#[test]
fn test_commit_keeps_refused_items_staged() {
    let adapter = Arc::new(SelectiveAdapter::refusing(&["pool_item_stuck"]));
    let mut pool = ItemPool::new(adapter.clone(), Ttl::Unset);

    pool.save_deferred(&item("ok", serde_json::json!(1))).unwrap();
    pool.save_deferred(&item("stuck", serde_json::json!(2))).unwrap();

    assert!(!pool.commit());
    assert_eq!(pool.deferred_len(), 1);
    assert!(pool.has_item("ok").unwrap());
    assert!(!pool.has_item("stuck").unwrap());

    pool.discard_deferred();
    assert!(pool.commit());
}

#[test]
fn test_invalid_key_rejected_before_adapter() {
    let adapter = Arc::new(SelectiveAdapter::default());
    let pool = ItemPool::new(adapter.clone(), Ttl::Unset);

    let result = pool.get_items(&["good", "bad:key!"]);
    assert!(matches!(result, Err(CacheError::InvalidKey(_))));

    let result = pool.save(&item("", serde_json::json!(null)));
    assert!(matches!(result, Err(CacheError::InvalidKey(_))));
    assert!(adapter.ttls.lock().is_empty());
}

#[test]
fn test_clear_leaves_foreign_entries() {
    let memory = Arc::new(MemoryCacheAdapter::new());
    let pool = ItemPool::new(memory.clone(), Ttl::Unset);
    memory.set("other_app", "keep", None);
    pool.save(&item("mine", serde_json::json!("drop"))).unwrap();

    assert!(pool.clear());

    assert!(memory.has("other_app"));
    assert!(!pool.has_item("mine").unwrap());
}

// == Logging Decorator Tests ==

#[test]
fn test_logging_adapter_is_transparent() {
    let memory = Arc::new(MemoryCacheAdapter::new());
    let logging = LoggingAdapter::new(memory.clone())
        .with_label("primary")
        .with_level(LogLevel::Warn)
        .with_mask(LogMask::ALL);
    let pool = ItemPool::new(Arc::new(logging), Ttl::Unset);

    assert!(pool.save(&item("seen", serde_json::json!([1, 2]))).unwrap());
    let fetched = pool.get_item("seen").unwrap();

    assert!(fetched.is_hit());
    assert_eq!(fetched.get::<Vec<i32>>().unwrap(), Some(vec![1, 2]));
    assert!(memory.has("pool_item_seen"));
}

#[test]
fn test_logging_adapter_over_null_reports_failure() {
    let logging = LoggingAdapter::new(NullCacheAdapter::new()).with_label("void");
    assert_eq!(logging.name(), "void");

    let mut pool = ItemPool::new(Arc::new(logging), Ttl::Unset);
    pool.save_deferred(&item("a", serde_json::json!(1))).unwrap();

    assert!(!pool.commit());
    assert_eq!(pool.deferred_len(), 1);
    assert!(!pool.delete_items(&["a"]).unwrap());
}

// == Simple Cache Tests ==

#[test]
fn test_simple_cache_shares_adapter_with_pool() {
    let memory = Arc::new(MemoryCacheAdapter::new());
    let pool = ItemPool::new(memory.clone(), Ttl::Unset);
    let simple = SimpleCache::new(memory.clone(), Ttl::Unset);

    pool.save(&item("shared", serde_json::json!("pool"))).unwrap();
    simple.set("shared", &"simple", Ttl::Unset).unwrap();

    assert_eq!(
        pool.get_item("shared").unwrap().value(),
        Some(&serde_json::json!("pool"))
    );
    assert_eq!(simple.get("shared", String::new()).unwrap(), "simple");

    assert!(simple.clear());
    assert!(pool.has_item("shared").unwrap());
    assert!(!simple.has("shared").unwrap());
}
