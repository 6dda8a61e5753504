//! Fetch Orchestration Module
//!
//! Ties the cache to the backend: check the cache first, call the supplied
//! fetcher on a miss or an expired entry, and write the result back.
//!
//! Failures are never cached and never retried here; the caller decides the
//! fallback. Two concurrent misses for the same key may both fetch - the
//! cache lock is not held across the fetcher await, so the race is benign
//! and the last write wins.

use std::future::Future;

use tracing::{debug, warn};

use crate::cache::{build_key, CachePayload, SharedCache};
use crate::error::Result;

// == Product Request ==
/// Describes one cacheable product listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRequest {
    /// Category to list, or None for all categories
    pub category_id: Option<u32>,
    /// Restrict to discounted products
    pub deals_only: bool,
    /// Store whose stock and pricing apply, if one is selected
    pub store_id: Option<u32>,
}

impl ProductRequest {
    pub fn new(category_id: Option<u32>, deals_only: bool, store_id: Option<u32>) -> Self {
        Self {
            category_id,
            deals_only,
            store_id,
        }
    }

    /// The cache key this request resolves to.
    pub fn cache_key(&self) -> String {
        build_key(self.category_id, self.deals_only, self.store_id)
    }
}

// == Cache Loader ==
/// Fetch-and-cache orchestrator over a shared product cache.
#[derive(Clone)]
pub struct CacheLoader {
    cache: SharedCache,
}

impl CacheLoader {
    pub fn new(cache: SharedCache) -> Self {
        Self { cache }
    }

    /// Returns the cached payload for the request, or resolves it through
    /// `fetcher` and caches the result.
    ///
    /// On a fresh cache hit the fetcher is never invoked. On failure the
    /// error propagates unchanged and the cache is left exactly as it was.
    pub async fn get_or_fetch<F, Fut>(&self, request: &ProductRequest, fetcher: F) -> Result<CachePayload>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<CachePayload>>,
    {
        let cache_key = request.cache_key();

        {
            let cache = self.cache.read().await;
            if let Some(payload) = cache.get_fresh(&cache_key) {
                debug!(key = %cache_key, "cache hit");
                return Ok(payload.clone());
            }
        }

        debug!(key = %cache_key, "cache miss, fetching from backend");
        match fetcher().await {
            Ok(payload) => {
                let mut cache = self.cache.write().await;
                cache.set(cache_key, payload.clone());
                Ok(payload)
            }
            Err(err) => {
                warn!(key = %cache_key, error = %err, "fetch failed; nothing cached");
                Err(err)
            }
        }
    }

    /// The shared cache this loader reads and writes.
    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }
}
