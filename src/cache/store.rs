//! Cache Store Module
//!
//! Key-to-entry map with age-based sweeping. Locking lives one level up in
//! [`Cache`](crate::cache::Cache); this type assumes exclusive access.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Response storage keyed by request URL.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lookup and sweep statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Stores a payload under `key`.
    ///
    /// If the key already exists, the payload is overwritten and its age is
    /// reset (last write wins).
    pub fn add(&mut self, key: String, payload: Bytes) {
        self.entries.insert(key, CacheEntry::new(payload));
    }

    // == Get ==
    /// Retrieves the payload stored under `key`.
    ///
    /// Age is not checked here: an entry past its TTL is still returned until
    /// a sweep removes it. Entries are left untouched; only the hit/miss
    /// counters change, hence `&mut self`.
    pub fn get(&mut self, key: &str) -> Option<Bytes> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.payload.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Clean ==
    /// Removes every entry older than `ttl`.
    ///
    /// Returns the number of entries removed.
    pub fn clean(&mut self, ttl: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_older_than(ttl));
        let removed = before - self.entries.len();

        self.stats.record_expired(removed);
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    ///
    /// `total_entries` is filled in here from the live map and nowhere else.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
