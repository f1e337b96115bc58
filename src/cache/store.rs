//! Cache Store Module
//!
//! Main cache engine combining a HashMap index with an arena-backed LRU list
//! and TTL expiration. `CacheStore` is not synchronized; see `LruCache` for
//! the lock-guarded handle shared between request handlers and the sweep.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, Clock, LruList, SlotId, SystemClock};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Bounded key-value storage with LRU eviction and per-entry TTL.
#[derive(Debug)]
pub struct CacheStore<C = SystemClock> {
    /// Key to list handle
    index: HashMap<String, SlotId>,
    /// Entries in recency order
    order: LruList<CacheEntry>,
    /// Maximum number of entries allowed
    capacity: usize,
    clock: C,
}

impl CacheStore<SystemClock> {
    // == Constructor ==
    /// Creates a new CacheStore backed by the system clock.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_clock(capacity, SystemClock)
    }
}

impl<C: Clock> CacheStore<C> {
    /// Creates a new CacheStore reading time from `clock`.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` if `capacity` is zero.
    pub fn with_clock(capacity: usize, clock: C) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            index: HashMap::with_capacity(capacity),
            order: LruList::with_capacity(capacity),
            capacity,
            clock,
        })
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A hit moves the entry to the front. An entry whose expiry has strictly
    /// passed is removed and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let id = *self.index.get(key)?;
        let now = self.clock.now_secs();

        let expired = self.order.get(id).map_or(true, |e| e.is_expired_at(now));
        if expired {
            self.index.remove(key);
            self.order.remove(id);
            trace!(key, "lazily expired entry on read");
            return None;
        }

        self.order.move_to_front(id);
        self.order.get(id).map(|entry| entry.value.clone())
    }

    // == Set ==
    /// Stores a key-value pair expiring `ttl_seconds` from now.
    ///
    /// If the key already exists, the value is overwritten, the TTL is reset
    /// and the entry moves to the front without consulting capacity.
    /// Otherwise, if the cache is full, exactly one least recently used
    /// entry is evicted before the new entry is inserted.
    pub fn set(&mut self, key: String, value: String, ttl_seconds: i64) {
        let now = self.clock.now_secs();

        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.order.get_mut(id) {
                entry.refresh(value, now, ttl_seconds);
            }
            self.order.move_to_front(id);
            return;
        }

        if self.order.len() >= self.capacity {
            self.evict_oldest();
        }

        let id = self
            .order
            .push_front(CacheEntry::new(key.clone(), value, now, ttl_seconds));
        self.index.insert(key, id);
    }

    // == Delete Expired ==
    /// Removes expired entries starting from the least recently used end.
    ///
    /// The walk stops at the first entry that is still live, so expired
    /// entries sitting in front of a live one are left for lazy expiration
    /// on their next read.
    ///
    /// Returns the number of entries removed.
    pub fn delete_expired(&mut self) -> usize {
        let now = self.clock.now_secs();
        let mut removed = 0;

        while let Some(id) = self.order.back() {
            if self.order.get(id).map_or(false, |e| e.outlives(now)) {
                break;
            }
            match self.order.remove(id) {
                Some(entry) => {
                    self.index.remove(&entry.key);
                    removed += 1;
                }
                None => break,
            }
        }

        removed
    }

    /// Drops the back of the list.
    fn evict_oldest(&mut self) {
        if let Some(evicted) = self.order.pop_back() {
            self.index.remove(&evicted.key);
            debug!(key = %evicted.key, "evicted least recently used entry");
        }
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Number of stored entries, expired-but-unswept ones included.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    /// Keys from most to least recently used.
    #[cfg(test)]
    pub(crate) fn keys_by_recency(&self) -> Vec<String> {
        self.order.iter().map(|(_, e)| e.key.clone()).collect()
    }

    /// Verifies the index and list describe the same set of entries.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert!(self.order.len() <= self.capacity, "capacity exceeded");
        assert_eq!(self.index.len(), self.order.len(), "index/list size mismatch");

        for (id, entry) in self.order.iter() {
            assert_eq!(
                self.index.get(&entry.key),
                Some(&id),
                "key {} indexed at the wrong slot",
                entry.key
            );
        }
    }
}
