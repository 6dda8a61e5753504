//! Expiry Sweep Task
//!
//! Background task that periodically runs the time-based invalidation
//! check, so stale entries are purged even when no environment trigger
//! fires.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::invalidation::InvalidationManager;

/// Spawns a background task that purges expired entries on an interval.
///
/// Listeners subscribed to the manager are notified with reason
/// `TimeExpired` whenever a sweep removed anything. The returned handle
/// can be aborted during shutdown.
pub fn spawn_expiry_sweep(
    manager: Arc<InvalidationManager>,
    interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(interval_secs, "starting expiry sweep task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = manager.check_time_based_invalidation().await;
            if removed > 0 {
                info!(removed, "expiry sweep purged entries");
            } else {
                debug!("expiry sweep: nothing expired");
            }
        }
    })
}
