//! Invalidation Manager Module
//!
//! Explicitly constructed, dependency-injected broadcaster: it removes
//! matching entries from the shared cache, then synchronously notifies
//! every subscribed listener. A panicking listener is isolated and logged;
//! the remaining listeners still run.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tracing::{debug, error, info};

use crate::cache::{CacheStats, SharedCache};
use crate::invalidation::{DataChange, InvalidationEvent, InvalidationReason, Scope};

/// Callback invoked on every invalidation event.
///
/// Dispatch runs over a snapshot of the registry, so a listener may
/// subscribe or unsubscribe from within its own invocation; registrations
/// made during dispatch see the next event, not the current one.
pub type Listener = Arc<dyn Fn(&InvalidationEvent) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe that registration.
///
/// Registering the same closure twice yields two ids and two invocations
/// per event; there is no deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Listener count plus a snapshot of the cache counters.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ManagerStats {
    pub listeners: usize,
    pub cache: CacheStats,
}

// == Invalidation Manager ==
pub struct InvalidationManager {
    cache: SharedCache,
    listeners: Mutex<Vec<(ListenerId, Listener)>>,
    next_id: AtomicU64,
}

impl InvalidationManager {
    // == Constructor ==
    /// Creates a manager over the given shared cache.
    pub fn new(cache: SharedCache) -> Self {
        Self {
            cache,
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    // == Subscribe / Unsubscribe ==
    /// Registers a listener; every invalidation event will invoke it, in
    /// subscription order relative to other listeners.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&InvalidationEvent) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock_listeners().push((id, Arc::new(listener)));
        id
    }

    /// Removes the registration for the given id; no-op if already removed.
    /// Returns whether a registration was removed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.lock_listeners();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() < before
    }

    // == Scoped Invalidation ==
    /// Clears all entries for one category, then notifies listeners.
    pub async fn invalidate_category(&self, category_id: u32, reason: InvalidationReason) {
        let removed = self.cache.write().await.remove_category(category_id);
        info!(category_id, %reason, removed, "cache invalidation: category");
        self.notify(&InvalidationEvent {
            scope: Scope::Category(category_id),
            reason,
        });
    }

    /// Clears all entries for one store, then notifies listeners.
    pub async fn invalidate_store(&self, store_id: u32, reason: InvalidationReason) {
        let removed = self.cache.write().await.remove_store(store_id);
        info!(store_id, %reason, removed, "cache invalidation: store");
        self.notify(&InvalidationEvent {
            scope: Scope::Store(store_id),
            reason,
        });
    }

    /// Clears the entire cache, then notifies listeners.
    pub async fn invalidate_all(&self, reason: InvalidationReason) {
        let removed = self.cache.write().await.clear();
        info!(%reason, removed, "cache invalidation: all");
        self.notify(&InvalidationEvent {
            scope: Scope::All,
            reason,
        });
    }

    // == Data Change Policy ==
    /// Maps a coarse-grained data change onto the matching invalidation.
    ///
    /// Product and pricing changes clear everything, since their effects
    /// can surface in any cached grouping. Category and store changes
    /// without an id also clear everything.
    pub async fn invalidate_by_data_change(&self, change: DataChange) {
        match change {
            DataChange::Product | DataChange::Pricing => {
                self.invalidate_all(InvalidationReason::DataUpdate).await;
            }
            DataChange::Category(Some(id)) => {
                self.invalidate_category(id, InvalidationReason::DataUpdate)
                    .await;
            }
            DataChange::Store(Some(id)) => {
                self.invalidate_store(id, InvalidationReason::DataUpdate)
                    .await;
            }
            DataChange::Category(None) | DataChange::Store(None) => {
                self.invalidate_all(InvalidationReason::DataUpdate).await;
            }
        }
    }

    // == Time-Based Check ==
    /// Purges entries that have outlived the TTL.
    ///
    /// When anything was removed, listeners are notified with reason
    /// `TimeExpired` and scope `All`. Returns the number purged.
    pub async fn check_time_based_invalidation(&self) -> usize {
        let removed = self.cache.write().await.remove_expired();
        if removed > 0 {
            info!(removed, "time-based invalidation purged expired entries");
            self.notify(&InvalidationEvent {
                scope: Scope::All,
                reason: InvalidationReason::TimeExpired,
            });
        } else {
            debug!("time-based invalidation: nothing expired");
        }
        removed
    }

    // == Stats ==
    /// Listener count plus the cache's own counters.
    pub async fn stats(&self) -> ManagerStats {
        ManagerStats {
            listeners: self.lock_listeners().len(),
            cache: self.cache.read().await.stats(),
        }
    }

    /// The shared cache this manager invalidates.
    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    // == Dispatch ==
    fn notify(&self, event: &InvalidationEvent) {
        // Snapshot the registry before dispatch so a listener can
        // subscribe or unsubscribe without deadlocking on the lock
        let snapshot: Vec<(ListenerId, Listener)> = self
            .lock_listeners()
            .iter()
            .map(|(id, listener)| (*id, Arc::clone(listener)))
            .collect();

        for (id, listener) in snapshot {
            if catch_unwind(AssertUnwindSafe(|| listener(event))).is_err() {
                error!(listener = id.0, scope = %event.scope, reason = %event.reason,
                    "invalidation listener panicked; continuing dispatch");
            }
        }
    }

    fn lock_listeners(&self) -> std::sync::MutexGuard<'_, Vec<(ListenerId, Listener)>> {
        // Listener panics are caught before they can poison the lock, but
        // recover anyway rather than propagate a panic here.
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
