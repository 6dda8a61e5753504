//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with write-order tracking,
//! a capacity bound, and uniform TTL expiration.
//!
//! No operation here fails: an absent key is a normal outcome, so the API
//! returns Options rather than errors.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::order::WriteOrder;
use crate::cache::{key, CacheEntry, CachePayload, CacheStats};

/// Shared handle to a product cache, as consumers and the invalidation
/// manager hold it.
pub type SharedCache = Arc<RwLock<ProductCache>>;

// == Product Cache ==
/// In-memory product cache with TTL and capacity bound.
#[derive(Debug)]
pub struct ProductCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Key write order, oldest first
    order: WriteOrder,
    /// Eviction and expiry counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL in milliseconds applied uniformly to all entries
    ttl_ms: u64,
}

impl ProductCache {
    // == Constructor ==
    /// Creates a new ProductCache with the given capacity and TTL.
    pub fn new(max_entries: usize, ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            order: WriteOrder::new(),
            stats: CacheStats::new(),
            max_entries,
            ttl_ms,
        }
    }

    /// Wraps a new cache in the shared handle consumers use.
    pub fn shared(max_entries: usize, ttl_ms: u64) -> SharedCache {
        Arc::new(RwLock::new(Self::new(max_entries, ttl_ms)))
    }

    /// The uniform TTL this cache applies.
    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    // == Get ==
    /// Returns the entry for a key, expired or not. No side effects.
    pub fn get(&self, cache_key: &str) -> Option<&CacheEntry> {
        self.entries.get(cache_key)
    }

    /// Returns the payload for a key only if the entry is still fresh.
    ///
    /// No side effects: an expired entry is left in place and will be
    /// overwritten by the next `set` or purged by `remove_expired`.
    pub fn get_fresh(&self, cache_key: &str) -> Option<&CachePayload> {
        self.entries
            .get(cache_key)
            .filter(|entry| !entry.is_expired(self.ttl_ms))
            .map(|entry| &entry.payload)
    }

    // == Set ==
    /// Inserts or overwrites the entry for a key with a fresh timestamp.
    ///
    /// If the insertion pushes the cache over capacity, the oldest-written
    /// entries are evicted until the size bound holds again. Write recency
    /// is what counts here; reads never protect an entry from eviction.
    pub fn set(&mut self, cache_key: String, payload: CachePayload) {
        self.entries
            .insert(cache_key.clone(), CacheEntry::new(payload));
        self.order.record(&cache_key);

        while self.entries.len() > self.max_entries {
            match self.order.pop_oldest() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                    self.stats.record_eviction();
                    debug!(key = %oldest, "evicted oldest cache entry");
                }
                None => break,
            }
        }

        self.stats.set_size(self.entries.len());
    }

    // == Remove ==
    /// Deletes the entry for a key; no-op if absent. Returns whether an
    /// entry was removed.
    pub fn remove(&mut self, cache_key: &str) -> bool {
        let removed = self.entries.remove(cache_key).is_some();
        if removed {
            self.order.remove(cache_key);
            self.stats.set_size(self.entries.len());
        }
        removed
    }

    // == Scoped Removal ==
    /// Deletes every entry cached for the given category id.
    ///
    /// Entries for other categories, the "all" grouping, and store-only
    /// keys are untouched. Returns the number of entries removed.
    pub fn remove_category(&mut self, category_id: u32) -> usize {
        self.remove_where(|k| key::matches_category(k, category_id))
    }

    /// Deletes every entry cached for the given store id.
    pub fn remove_store(&mut self, store_id: u32) -> usize {
        self.remove_where(|k| key::matches_store(k, store_id))
    }

    fn remove_where<F: Fn(&str) -> bool>(&mut self, predicate: F) -> usize {
        let matching: Vec<String> = self
            .entries
            .keys()
            .filter(|k| predicate(k))
            .cloned()
            .collect();

        for cache_key in &matching {
            self.entries.remove(cache_key);
            self.order.remove(cache_key);
        }

        self.stats.set_size(self.entries.len());
        matching.len()
    }

    // == Remove Expired ==
    /// Purges all entries that have outlived the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn remove_expired(&mut self) -> usize {
        let ttl_ms = self.ttl_ms;
        let removed = self.remove_where_entry(|entry| entry.is_expired(ttl_ms));
        self.stats.record_expired(removed as u64);
        removed
    }

    fn remove_where_entry<F: Fn(&CacheEntry) -> bool>(&mut self, predicate: F) -> usize {
        let matching: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| predicate(entry))
            .map(|(k, _)| k.clone())
            .collect();

        for cache_key in &matching {
            self.entries.remove(cache_key);
            self.order.remove(cache_key);
        }

        self.stats.set_size(self.entries.len());
        matching.len()
    }

    // == Clear ==
    /// Removes all entries. Returns the number removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.order.clear();
        self.stats.set_size(0);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats;
        stats.set_size(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
