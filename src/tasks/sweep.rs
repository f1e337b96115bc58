//! Expiration Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{Clock, LruCache};

/// Spawns a background task that sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for `interval` between
/// sweeps. Each sweep holds the cache lock only while it walks the
/// expired tail of the recency list.
///
/// # Arguments
/// * `cache` - Shared reference to the cache
/// * `interval` - Time between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(LruCache::new(1024)?);
/// let sweep_handle = spawn_sweep_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task<C>(cache: Arc<LruCache<C>>, interval: Duration) -> JoinHandle<()>
where
    C: Clock + 'static,
{
    tokio::spawn(async move {
        info!("Starting expiration sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.delete_expired();

            if removed > 0 {
                info!("Expiration sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiration sweep: no expired entries at the tail");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    const TICK: Duration = Duration::from_millis(20);

    fn cache_with_clock() -> (Arc<LruCache<ManualClock>>, ManualClock) {
        let clock = ManualClock::new(1_000);
        let cache = Arc::new(LruCache::with_clock(100, clock.clone()).unwrap());
        (cache, clock)
    }

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let (cache, clock) = cache_with_clock();
        cache.set("expire_soon".to_string(), "value".to_string(), 1);
        clock.advance(2);

        let handle = spawn_sweep_task(cache.clone(), TICK);
        tokio::time::sleep(TICK * 5).await;

        assert_eq!(cache.with_store(|s| s.len()), 0);

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_live_entries() {
        let (cache, _clock) = cache_with_clock();
        cache.set("long_lived".to_string(), "value".to_string(), 3600);

        let handle = spawn_sweep_task(cache.clone(), TICK);
        tokio::time::sleep(TICK * 5).await;

        assert_eq!(cache.get("long_lived"), Some("value".to_string()));

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let (cache, _clock) = cache_with_clock();

        let handle = spawn_sweep_task(cache, TICK);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
