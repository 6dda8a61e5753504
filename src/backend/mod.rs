//! Backend Module
//!
//! HTTP client for the storefront's REST backend: products, categories,
//! pricing, addresses, and orders.

mod client;

pub use client::{BackendClient, ProductQuery};
