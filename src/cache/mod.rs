//! Cache Module
//!
//! In-memory product cache with uniform TTL expiration and a capacity bound
//! enforced by oldest-write-first eviction.

mod entry;
mod key;
mod order;
mod payload;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use key::{build_key, matches_category, matches_store};
pub use payload::CachePayload;
pub use stats::CacheStats;
pub use store::{ProductCache, SharedCache};

// == Public Constants ==
/// Default maximum number of cached entries
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// Default time-to-live applied uniformly to all entries (5 minutes)
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1000;

/// Entry count above which a session-end cleanup clears the cache
pub const SESSION_END_CLEANUP_THRESHOLD: usize = 20;
