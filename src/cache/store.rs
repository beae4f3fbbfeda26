//! Cache Store Module
//!
//! Main cache engine: HashMap storage with lazy, read-time expiration.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::entry::current_timestamp;
use crate::cache::CacheEntry;
use crate::error::{CacheError, Result};
use crate::models::ExpireRequest;

// == Cache Store ==
/// Main cache storage keyed by string.
///
/// Expired entries may stay resident until something looks at them. Any
/// operation that finds one removes it and treats the key as absent.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores a value under `key`, replacing any previous entry.
    ///
    /// A set always clears the expiration. Empty values are rejected and leave
    /// the store unchanged.
    pub fn set(&mut self, key: String, value: String) -> Result<()> {
        if value.is_empty() {
            return Err(CacheError::EmptyValue(key));
        }

        debug!(key = %key, bytes = value.len(), "cache set");
        self.entries.insert(key, CacheEntry::new(value));
        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Missing and expired keys both yield `NotFound`.
    pub fn get(&mut self, key: &str) -> Result<String> {
        self.get_at(key, current_timestamp())
    }

    /// Same as [`CacheStore::get`], judging expiration at `now` (Unix seconds).
    pub fn get_at(&mut self, key: &str, now: i64) -> Result<String> {
        self.live_entry_mut(key, now)
            .map(|entry| entry.value.clone())
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    // == Delete ==
    /// Removes an entry by key.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        let now = current_timestamp();
        if self.live_entry_mut(key, now).is_none() {
            return Err(CacheError::NotFound(key.to_string()));
        }

        self.entries.remove(key);
        if self.entries.contains_key(key) {
            return Err(CacheError::Internal(format!("key '{}' survived delete", key)));
        }

        debug!(key = %key, "cache delete");
        Ok(())
    }

    // == Set Expire ==
    /// Attaches an absolute expiration to an existing entry.
    ///
    /// `payload` is the raw request body, a JSON object with an `expire`
    /// field. Only the expiration changes; the value is left untouched.
    pub fn set_expire(&mut self, key: &str, payload: impl AsRef<[u8]>) -> Result<()> {
        let now = current_timestamp();
        let entry = self
            .live_entry_mut(key, now)
            .ok_or_else(|| CacheError::NotFound(key.to_string()))?;

        let request = ExpireRequest::parse(payload)?;
        entry.expire_at = Some(request.expire);

        debug!(
            key = %key,
            expire_at = request.expire,
            remaining = ?entry.ttl_remaining_at(now),
            "cache expire set"
        );
        Ok(())
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        self.cleanup_expired_at(current_timestamp())
    }

    /// Same as [`CacheStore::cleanup_expired`], judging expiration at `now`.
    pub fn cleanup_expired_at(&mut self, now: i64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the number of resident entries, including expired ones not
    /// yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry for `key` if it is present and not expired at `now`,
    /// purging it when it has expired.
    fn live_entry_mut(&mut self, key: &str, now: i64) -> Option<&mut CacheEntry> {
        if self.entries.get(key)?.is_expired_at(now) {
            self.entries.remove(key);
            debug!(key = %key, "purged expired entry on access");
            return None;
        }
        self.entries.get_mut(key)
    }
}
