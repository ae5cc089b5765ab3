//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with an age stamp.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry: an opaque payload and its insertion time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored response body, never interpreted by the cache
    pub payload: Bytes,
    /// Monotonic insertion timestamp
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current instant.
    pub fn new(payload: Bytes) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long ago the entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Older Than ==
    /// Checks whether the entry has outlived `ttl`.
    ///
    /// Boundary condition: the comparison is strict, so an entry whose age is
    /// exactly `ttl` is still considered fresh.
    pub fn is_older_than(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}
