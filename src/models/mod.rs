//! Data models for the storefront backend
//!
//! DTOs for products, categories, and account data returned by the
//! backend data source.

pub mod account;
pub mod category;
pub mod product;

pub use account::{Address, Order, OrderItem};
pub use category::Category;
pub use product::{Pricing, Product};
