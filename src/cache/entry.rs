//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

// == Cache Entry ==
/// A single cached key with its value and absolute expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The key this entry is indexed under
    pub key: String,
    /// The stored value
    pub value: String,
    /// Expiration timestamp (Unix seconds)
    pub expires_at: i64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry expiring `ttl_seconds` after `now`.
    ///
    /// A zero or negative TTL is accepted and yields an entry that is already
    /// at or past its expiry.
    pub fn new(key: String, value: String, now: i64, ttl_seconds: i64) -> Self {
        Self {
            key,
            value,
            expires_at: expiry_from(now, ttl_seconds),
        }
    }

    // == Refresh ==
    /// Overwrites the value and resets the TTL relative to `now`.
    pub fn refresh(&mut self, value: String, now: i64, ttl_seconds: i64) {
        self.value = value;
        self.expires_at = expiry_from(now, ttl_seconds);
    }

    // == Is Expired ==
    /// Checks whether a read at `now` must treat the entry as gone.
    ///
    /// Boundary condition: the expiry instant itself is still live; only a
    /// strictly later time expires the entry.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.expires_at
    }

    // == Outlives ==
    /// Checks whether the sweep must stop at this entry.
    ///
    /// The sweep keeps only entries whose expiry is strictly in the future,
    /// so an entry sitting exactly on its expiry second is collected by the
    /// sweep even though a read in that same second would still return it.
    pub fn outlives(&self, now: i64) -> bool {
        self.expires_at > now
    }
}

/// Absolute expiry for a TTL starting at `now`.
fn expiry_from(now: i64, ttl_seconds: i64) -> i64 {
    now.saturating_add(ttl_seconds)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn entry(now: i64, ttl: i64) -> CacheEntry {
        CacheEntry::new("k".to_string(), "v".to_string(), now, ttl)
    }

    #[test]
    fn test_entry_creation() {
        let entry = entry(1_000, 60);

        assert_eq!(entry.key, "k");
        assert_eq!(entry.value, "v");
        assert_eq!(entry.expires_at, 1_060);
        assert!(!entry.is_expired_at(1_000));
    }

    #[test]
    fn test_expiration_boundary_is_exclusive() {
        let entry = entry(1_000, 10);

        assert!(!entry.is_expired_at(1_009));
        assert!(!entry.is_expired_at(1_010));
        assert!(entry.is_expired_at(1_011));
    }

    #[test]
    fn test_sweep_boundary_is_inclusive() {
        let entry = entry(1_000, 10);

        assert!(entry.outlives(1_009));
        assert!(!entry.outlives(1_010));
    }

    #[test]
    fn test_negative_ttl_is_already_expired() {
        let entry = entry(1_000, -5);

        assert!(entry.is_expired_at(1_000));
        assert!(!entry.outlives(1_000));
    }

    #[test]
    fn test_refresh_resets_rather_than_extends() {
        let mut entry = entry(1_000, 10);
        entry.refresh("v2".to_string(), 1_005, 100);

        assert_eq!(entry.value, "v2");
        assert_eq!(entry.expires_at, 1_105);
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let entry = entry(1_000, i64::MAX);

        assert_eq!(entry.expires_at, i64::MAX);
        assert!(!entry.is_expired_at(i64::MAX));
    }
}
