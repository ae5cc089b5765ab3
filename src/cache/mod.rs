//! Cache Module
//!
//! Provides the in-memory response cache with time-based expiry.
//!
//! Entries are keyed by request URL and swept by a background reaper once
//! they outlive the cache's TTL. Lookups never check age themselves, so an
//! entry may be served for up to one sweep period past its TTL.

mod entry;
mod expiring;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::Cache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Shortest period the reaper timer will run at
pub const MIN_REAP_PERIOD: std::time::Duration = std::time::Duration::from_millis(1);

/// Longest period the reaper timer will run at (about 30 years)
pub const MAX_REAP_PERIOD: std::time::Duration = std::time::Duration::from_secs(86_400 * 365 * 30);
