//! Test helpers shared by unit tests.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::adapter::{CacheAdapter, MemoryCacheAdapter, StoreEntry, LOG_TARGET};

/// One event emitted by a logging adapter.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
}

#[derive(Default)]
struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

#[derive(Clone)]
struct CaptureLayer {
    target: &'static str,
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != self.target {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.records.lock().push(LogRecord {
            level: *event.metadata().level(),
            message: visitor.0,
        });
    }
}

/// Runs `f` with a subscriber recording adapter log events.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<LogRecord>) {
    capture_logs_for(LOG_TARGET, f)
}

/// Runs `f` with a subscriber recording events emitted under `target`.
pub fn capture_logs_for<R>(target: &'static str, f: impl FnOnce() -> R) -> (R, Vec<LogRecord>) {
    let layer = CaptureLayer {
        target,
        records: Arc::default(),
    };
    let records = layer.records.clone();
    let subscriber = tracing_subscriber::registry().with(layer);

    let result = tracing::subscriber::with_default(subscriber, f);
    let captured = records.lock().clone();
    (result, captured)
}

/// Memory adapter whose batch reads answer only the first key.
#[derive(Debug, Default)]
pub struct TruncatingAdapter {
    pub inner: MemoryCacheAdapter,
}

impl CacheAdapter for TruncatingAdapter {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn get_multiple(&self, keys: &[String]) -> Vec<Option<String>> {
        self.inner.get_multiple(&keys[..keys.len().min(1)])
    }

    fn set(&self, key: &str, value: &str, ttl: Option<i64>) -> bool {
        self.inner.set(key, value, ttl)
    }

    fn set_multiple(&self, entries: &HashMap<String, StoreEntry>) -> Vec<String> {
        self.inner.set_multiple(entries)
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
