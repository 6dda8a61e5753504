//! Cache Payload Module
//!
//! Tagged union over the result shapes the cache can hold, so consumers
//! branch exhaustively instead of shape-checking loose JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Product;

// == Cache Payload ==
/// A cacheable fetch result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum CachePayload {
    /// Flat product list for a category or deals view
    ProductList(Vec<Product>),
    /// Subcategory id mapped to its product list
    SubcategoryMap(HashMap<u32, Vec<Product>>),
}

impl CachePayload {
    /// Total number of products across the payload.
    pub fn product_count(&self) -> usize {
        match self {
            CachePayload::ProductList(products) => products.len(),
            CachePayload::SubcategoryMap(groups) => groups.values().map(Vec::len).sum(),
        }
    }

    /// True when the payload holds no products at all.
    pub fn is_empty(&self) -> bool {
        self.product_count() == 0
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn product(id: u32) -> Product {
        Product {
            id,
            name: format!("product-{id}"),
            slug: String::new(),
            category_id: None,
            in_stock: true,
            pricing: None,
        }
    }

    #[test]
    fn test_product_count_list() {
        let payload = CachePayload::ProductList(vec![product(1), product(2)]);
        assert_eq!(payload.product_count(), 2);
        assert!(!payload.is_empty());
    }

    #[test]
    fn test_product_count_map() {
        let mut groups = HashMap::new();
        groups.insert(10, vec![product(1)]);
        groups.insert(11, vec![product(2), product(3)]);
        let payload = CachePayload::SubcategoryMap(groups);
        assert_eq!(payload.product_count(), 3);
    }

    #[test]
    fn test_empty_payloads() {
        assert!(CachePayload::ProductList(Vec::new()).is_empty());
        assert!(CachePayload::SubcategoryMap(HashMap::new()).is_empty());
    }

    #[test]
    fn test_serde_tagging() {
        let payload = CachePayload::ProductList(vec![product(1)]);
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"kind\":\"product_list\""));
        let back: CachePayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }
}
