//! Invalidation Module
//!
//! Publish/subscribe invalidation for the product cache: scoped removal of
//! cached entries plus synchronous listener notification, and the explicit
//! adapter functions a host shell wires to environment triggers.

mod event;
mod hooks;
mod manager;

pub use event::{DataChange, InvalidationEvent, InvalidationReason, Scope};
pub use hooks::{on_external_cache_change, on_session_end, on_visibility_restored};
pub use manager::{InvalidationManager, ListenerId, ManagerStats};
