//! Storefront Cache - client-side product and pricing cache
//!
//! Caches category and subcategory product listings keyed by
//! (category, deals flag, store), with uniform TTL expiration, a capacity
//! bound evicting the oldest write first, scoped publish/subscribe
//! invalidation, and a fetch-and-cache orchestrator over the storefront's
//! REST backend.

pub mod backend;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod invalidation;
pub mod models;
pub mod tasks;

pub use backend::{BackendClient, ProductQuery};
pub use cache::{CachePayload, ProductCache, SharedCache};
pub use config::Config;
pub use error::{BackendError, Result};
pub use fetch::{CacheLoader, ProductRequest};
pub use invalidation::{DataChange, InvalidationManager, InvalidationReason};
pub use tasks::spawn_expiry_sweep;
