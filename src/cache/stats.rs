//! Cache Statistics Module

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time cache statistics.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CacheStats {
    /// Current number of entries in the cache
    pub size: usize,
    /// Entries evicted to stay within the capacity bound
    pub evictions: u64,
    /// Entries removed because they outlived the TTL
    pub expired_removed: u64,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Adds to the expired-removal counter.
    pub fn record_expired(&mut self, count: u64) {
        self.expired_removed += count;
    }

    /// Updates the entry count.
    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }
}
