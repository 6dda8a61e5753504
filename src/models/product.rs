//! Product and pricing models
//!
//! Products carry an optional nested pricing block; discount fields default
//! to zero when the backend omits them.

use serde::{Deserialize, Serialize};

// == Pricing ==
/// Nested pricing block for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    /// Undiscounted unit price
    pub base_price: f64,
    /// Price after discounts
    pub final_price: f64,
    /// Percentage discount applied, 0 when none
    #[serde(default)]
    pub discount_percentage: f64,
    /// Absolute discount amount applied, 0 when none
    #[serde(default)]
    pub discount_applied: f64,
}

impl Pricing {
    /// Returns true when any discount is in effect.
    pub fn is_discounted(&self) -> bool {
        self.discount_applied > 0.0 || self.discount_percentage > 0.0
    }
}

// == Product ==
/// A product record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    /// Category this product is listed under, if any
    #[serde(default)]
    pub category_id: Option<u32>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Store-dependent pricing; absent when no store context was given
    #[serde(default)]
    pub pricing: Option<Pricing>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Effective unit price: final price when pricing is present, else 0.
    pub fn effective_price(&self) -> f64 {
        self.pricing.as_ref().map(|p| p.final_price).unwrap_or(0.0)
    }
}
