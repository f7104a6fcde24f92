//! Expired Entry Cleanup Task
//!
//! Background task that periodically sweeps expired values out of the
//! in-memory adapter.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::adapter::MemoryCacheAdapter;

/// Spawns a background task that periodically removes expired values.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps.
///
/// # Arguments
/// * `adapter` - shared in-memory adapter to sweep
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_cleanup_task(
    adapter: Arc<MemoryCacheAdapter>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expired entry cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = adapter.cleanup_expired();

            if removed > 0 {
                info!("Cleanup: removed {} expired entries", removed);
            } else {
                debug!("Cleanup: no expired entries found");
            }
        }
    })
}

/// Aborts a running cleanup task during shutdown.
pub fn stop_cleanup_task(handle: &JoinHandle<()>) {
    handle.abort();
    info!("Cleanup task aborted");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::CacheAdapter;
    use crate::test_support::capture_logs_for;
    use tracing::Level;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let adapter = Arc::new(MemoryCacheAdapter::new());
        adapter.set("expire_soon", "value", Some(1));

        let handle = spawn_cleanup_task(adapter.clone(), 1);

        // Wait for entry to expire and cleanup to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert_eq!(adapter.len(), 0, "Expired entry should have been cleaned up");

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let adapter = Arc::new(MemoryCacheAdapter::new());
        adapter.set("long_lived", "value", Some(3600));
        adapter.set("forever", "value", None);

        let handle = spawn_cleanup_task(adapter.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(adapter.get("long_lived"), Some("value".to_string()));
        assert!(adapter.has("forever"));

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let adapter = Arc::new(MemoryCacheAdapter::new());

        let handle = spawn_cleanup_task(adapter, 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }

    #[tokio::test]
    async fn test_stop_cleanup_task_logs_at_info() {
        let adapter = Arc::new(MemoryCacheAdapter::new());
        let handle = spawn_cleanup_task(adapter, 1);

        let (_, records) =
            capture_logs_for("item_pool::tasks::cleanup", || stop_cleanup_task(&handle));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::INFO);
        assert_eq!(records[0].message, "Cleanup task aborted");
    }
}
