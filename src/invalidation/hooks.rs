//! Environment Hook Adapters
//!
//! The core exposes only plain callable operations; it is the host shell
//! that owns environment triggers (window focus, cross-session signals,
//! shutdown) and calls these adapters at the right moments.

use tracing::info;

use crate::cache::SESSION_END_CLEANUP_THRESHOLD;
use crate::invalidation::{InvalidationManager, InvalidationReason};

/// Call when the UI becomes visible again after being backgrounded.
///
/// Runs the time-based check so the user does not see data that went stale
/// while the tab was hidden. Returns the number of entries purged.
pub async fn on_visibility_restored(manager: &InvalidationManager) -> usize {
    info!("visibility restored; checking cache freshness");
    manager.check_time_based_invalidation().await
}

/// Call when another session or tab signals that shared product data
/// changed. Clears everything rather than guess which entries are affected.
pub async fn on_external_cache_change(manager: &InvalidationManager) {
    info!("external cache change signalled; clearing cache");
    manager.invalidate_all(InvalidationReason::DataUpdate).await;
}

/// Call when the session is ending.
///
/// Only clears when the cache has grown past the cleanup threshold; small
/// caches are simply dropped with the process.
pub async fn on_session_end(manager: &InvalidationManager) {
    let size = manager.cache().read().await.len();
    if size > SESSION_END_CLEANUP_THRESHOLD {
        info!(size, "session ending with oversized cache; cleaning up");
        manager.invalidate_all(InvalidationReason::UserAction).await;
    }
}
