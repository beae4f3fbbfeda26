//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with absolute expiration.

use chrono::Utc;

// == Cache Entry ==
/// Represents a single cache entry: an opaque value plus optional expiration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Expiration timestamp (Unix seconds), None = no expiration
    pub expire_at: Option<i64>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry with no expiration.
    pub fn new(value: String) -> Self {
        Self {
            value,
            expire_at: None,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at the given Unix time.
    ///
    /// The comparison is strict: an entry whose `expire_at` equals `now` is
    /// still valid for that whole second.
    pub fn is_expired_at(&self, now: i64) -> bool {
        matches!(self.expire_at, Some(expire_at) if now > expire_at)
    }

    /// Returns remaining lifetime in seconds at `now`, or None if no
    /// expiration is set.
    pub fn ttl_remaining_at(&self, now: i64) -> Option<i64> {
        self.expire_at.map(|expire_at| expire_at.saturating_sub(now).max(0))
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in seconds.
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation_no_expiration() {
        let entry = CacheEntry::new("test_value".to_string());

        assert_eq!(entry.value, "test_value");
        assert!(entry.expire_at.is_none());
        assert!(!entry.is_expired_at(current_timestamp()));
        assert!(entry.ttl_remaining_at(current_timestamp()).is_none());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry {
            value: "test".to_string(),
            expire_at: Some(1_000),
        };

        assert!(!entry.is_expired_at(999));
        assert!(!entry.is_expired_at(1_000), "Boundary second is still valid");
        assert!(entry.is_expired_at(1_001));
    }

    #[test]
    fn test_entry_expiration_wall_clock() {
        let entry = CacheEntry {
            value: "test".to_string(),
            expire_at: Some(current_timestamp() + 1),
        };
        assert!(!entry.is_expired_at(current_timestamp()));

        // Strictly past the boundary second
        sleep(Duration::from_millis(2100));
        assert!(entry.is_expired_at(current_timestamp()));
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry {
            value: "test".to_string(),
            expire_at: Some(100),
        };
        assert_eq!(entry.ttl_remaining_at(90), Some(10));
        assert_eq!(entry.ttl_remaining_at(150), Some(0));
    }

    #[test]
    fn test_ttl_remaining_extreme_timestamps() {
        let entry = CacheEntry {
            value: "test".to_string(),
            expire_at: Some(i64::MIN),
        };
        assert_eq!(entry.ttl_remaining_at(current_timestamp()), Some(0));
        assert_eq!(entry.ttl_remaining_at(i64::MAX), Some(0));
        assert!(entry.is_expired_at(0));

        let entry = CacheEntry {
            value: "test".to_string(),
            expire_at: Some(i64::MAX),
        };
        assert_eq!(entry.ttl_remaining_at(i64::MIN), Some(i64::MAX));
        assert!(!entry.is_expired_at(i64::MAX));
    }
}
