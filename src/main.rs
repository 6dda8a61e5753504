//! Storefront Cache - host shell
//!
//! Thin binary that wires the library together the way an application
//! shell would: configuration from the environment, a shared cache, the
//! invalidation manager with a logging listener, the background expiry
//! sweep, and one demonstration fetch through the loader.

use std::sync::Arc;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_cache::cache::ProductCache;
use storefront_cache::{
    BackendClient, CacheLoader, CachePayload, Config, InvalidationManager, ProductQuery,
    ProductRequest,
};

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting storefront cache shell");

    let config = Config::from_env();
    info!(
        max_entries = config.max_entries,
        ttl_ms = config.ttl_ms,
        sweep_interval = config.sweep_interval,
        backend_url = %config.backend_url,
        "configuration loaded"
    );

    let cache = ProductCache::shared(config.max_entries, config.ttl_ms);
    let manager = Arc::new(InvalidationManager::new(cache.clone()));
    let loader = CacheLoader::new(cache.clone());
    let client = BackendClient::new(config.backend_url.clone(), config.bearer_token.clone());

    // Log every invalidation the way a UI would refresh on one
    manager.subscribe(|event| {
        info!(scope = %event.scope, reason = %event.reason, "invalidation event");
    });

    let sweep_handle =
        storefront_cache::spawn_expiry_sweep(Arc::clone(&manager), config.sweep_interval);
    info!("expiry sweep task started");

    // Demonstration fetch: top-level product listing through the cache
    let request = ProductRequest::new(None, false, None);
    let query = ProductQuery::default();
    match loader
        .get_or_fetch(&request, || async {
            client
                .fetch_products(&query)
                .await
                .map(CachePayload::ProductList)
        })
        .await
    {
        Ok(payload) => info!(products = payload.product_count(), "fetched product listing"),
        Err(err) => warn!(error = %err, "demonstration fetch failed"),
    }

    let stats = manager.stats().await;
    info!(
        size = stats.cache.size,
        listeners = stats.listeners,
        "cache ready; press Ctrl+C to exit"
    );

    shutdown_signal().await;

    sweep_handle.abort();
    info!("shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => warn!(error = %err, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("received SIGTERM, shutting down");
        }
    }
}
