//! Shared Cache Module
//!
//! Thread-safe handle over `CacheStore`. Every operation takes the same
//! exclusive lock for its whole duration; reads take it too because a hit
//! reorders the recency list.

use parking_lot::Mutex;

use crate::cache::{CacheStore, Clock, SystemClock};
use crate::error::Result;

// == LRU Cache ==
/// Bounded TTL-LRU cache safe to share across threads and tasks.
#[derive(Debug)]
pub struct LruCache<C = SystemClock> {
    inner: Mutex<CacheStore<C>>,
}

impl LruCache<SystemClock> {
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::from_store(CacheStore::new(capacity)?))
    }
}

impl<C: Clock> LruCache<C> {
    /// Creates a cache reading time from `clock` (useful for testing).
    pub fn with_clock(capacity: usize, clock: C) -> Result<Self> {
        Ok(Self::from_store(CacheStore::with_clock(capacity, clock)?))
    }

    fn from_store(store: CacheStore<C>) -> Self {
        Self {
            inner: Mutex::new(store),
        }
    }

    /// Returns a copy of the value stored under `key`, if present and live.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().get(key)
    }

    /// Stores `value` under `key` for `ttl_seconds` from now.
    pub fn set(&self, key: String, value: String, ttl_seconds: i64) {
        self.inner.lock().set(key, value, ttl_seconds);
    }

    /// Sweeps expired entries from the least recently used end.
    ///
    /// Returns the number of entries removed.
    pub fn delete_expired(&self) -> usize {
        self.inner.lock().delete_expired()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    #[cfg(test)]
    pub(crate) fn with_store<R>(&self, f: impl FnOnce(&CacheStore<C>) -> R) -> R {
        let guard = self.inner.lock();
        f(&*guard)
    }
}
