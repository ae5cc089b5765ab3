//! Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Weak;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::{CacheStore, MAX_REAP_PERIOD, MIN_REAP_PERIOD};

/// Spawns a background task that sweeps `store` every `ttl`.
///
/// The first sweep happens one full `ttl` after the call. Each sweep takes
/// the store lock and removes entries older than `ttl`. The task holds only a
/// weak reference and exits by itself once the store has been dropped; the
/// returned handle lets the owner abort it earlier.
///
/// The timer period is `ttl` clamped to
/// [`MIN_REAP_PERIOD`]..=[`MAX_REAP_PERIOD`]: a timer cannot tick with a zero
/// period, and a huge one would overflow the clock. The expiry threshold is
/// always the unclamped `ttl`.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new()));
/// let reaper = spawn_reaper(Arc::downgrade(&store), Duration::from_secs(5));
/// // Later, when the cache is discarded:
/// reaper.abort();
/// ```
pub fn spawn_reaper(store: Weak<Mutex<CacheStore>>, ttl: Duration) -> JoinHandle<()> {
    let period = ttl.clamp(MIN_REAP_PERIOD, MAX_REAP_PERIOD);
    let now = Instant::now();
    // Sweeping early is harmless: nothing is older than a huge ttl yet
    let start = now.checked_add(period).unwrap_or(now);

    tokio::spawn(async move {
        debug!(?ttl, "Starting cache reaper");

        let mut ticker = interval_at(start, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let Some(shared) = store.upgrade() else {
                debug!("Cache dropped, reaper exiting");
                break;
            };

            let removed = {
                let mut store_guard = shared.lock().await;
                store_guard.clean(ttl)
            };

            if removed > 0 {
                info!("Cache reaper: removed {} expired entries", removed);
            } else {
                debug!("Cache reaper: no expired entries found");
            }
        }
    })
}
