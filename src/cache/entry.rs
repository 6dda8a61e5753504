//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and the TTL predicate.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::cache::CachePayload;

// == Cache Entry ==
/// A single cached payload with its write timestamp.
///
/// The payload is only ever replaced wholesale; `stored_at` is updated
/// exactly when the payload is.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached result
    pub payload: CachePayload,
    /// Write timestamp (Unix milliseconds)
    pub stored_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(payload: CachePayload) -> Self {
        Self {
            payload,
            stored_at: current_timestamp_ms(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Pure predicate against the entry's write time: an entry is expired
    /// when strictly more than `ttl_ms` milliseconds have elapsed since it
    /// was written. An entry aged exactly `ttl_ms` is still fresh.
    pub fn is_expired(&self, ttl_ms: u64) -> bool {
        current_timestamp_ms().saturating_sub(self.stored_at) > ttl_ms
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was written.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.stored_at)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
