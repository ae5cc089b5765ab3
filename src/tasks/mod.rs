//! Background Tasks Module
//!
//! Contains background tasks that run periodically for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: Removes cache entries older than the cache TTL every TTL period

mod reaper;

pub use reaper::spawn_reaper;
