//! Expiring Cache Module
//!
//! Owning handle that pairs a locked [`CacheStore`] with its reaper task.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::spawn_reaper;

// == Cache ==
/// Thread-safe response cache whose entries expire after a fixed TTL.
///
/// Every operation takes the same exclusive lock for its whole critical
/// section. The reaper sweeps every `ttl`, so an entry disappears somewhere
/// in `[ttl, 2 * ttl)` after it was added.
///
/// Dropping the cache stops the reaper.
///
/// # Example
/// ```ignore
/// let cache = Cache::new(Duration::from_secs(5));
/// cache.add("https://example.com", "testdata").await;
/// assert!(cache.get("https://example.com").await.is_some());
/// ```
#[derive(Debug)]
pub struct Cache {
    /// Shared store; the reaper only holds a weak reference to it
    store: Arc<Mutex<CacheStore>>,
    /// Expiry threshold and sweep period, fixed at construction
    ttl: Duration,
    /// Background sweep task
    reaper: JoinHandle<()>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new()));
        let reaper = spawn_reaper(Arc::downgrade(&store), ttl);
        debug!(?ttl, "Cache created");

        Self { store, ttl, reaper }
    }

    // == Add ==
    /// Inserts or overwrites the payload for `key`, resetting its age.
    pub async fn add(&self, key: impl Into<String>, payload: impl Into<Bytes>) {
        let mut store = self.store.lock().await;
        store.add(key.into(), payload.into());
    }

    // == Get ==
    /// Returns the payload stored under `key`, if any.
    ///
    /// Entries past their TTL are still returned until the next sweep. A
    /// lookup never touches the entries themselves (an entry's age is not
    /// refreshed by reading it); the only state it changes is the hit/miss
    /// counters reported by [`Cache::stats`], so it takes the same
    /// exclusive lock as writes.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        let mut store = self.store.lock().await;
        store.get(key)
    }

    // == Clean ==
    /// Removes every entry older than `ttl` right now.
    ///
    /// Returns the number of entries removed.
    pub async fn clean(&self, ttl: Duration) -> usize {
        let mut store = self.store.lock().await;
        store.clean(ttl)
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Shutdown ==
    /// Stops the reaper. Entries already stored stay readable but no
    /// longer expire on their own.
    pub fn shutdown(&self) {
        if !self.reaper.is_finished() {
            self.reaper.abort();
            debug!("Cache reaper stopped");
        }
    }

    pub fn is_reaper_running(&self) -> bool {
        !self.reaper.is_finished()
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}
