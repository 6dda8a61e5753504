//! Account models: addresses and orders
//!
//! Consumed by the surrounding UI, not by the cache core; included so the
//! backend client covers the full data source surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Address ==
/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: u32,
    #[serde(default)]
    pub label: Option<String>,
    pub line1: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub is_default: bool,
}

// == Order ==
/// A line item within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: u32,
    pub quantity: u32,
    pub unit_price: f64,
}

/// A placed order with its items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub status: String,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_deserialize() {
        let json = r#"{"id": 1, "line1": "42 Galle Road", "city": "Colombo", "is_default": true}"#;
        let address: Address = serde_json::from_str(json).unwrap();
        assert!(address.is_default);
        assert!(address.latitude.is_none());
    }

    #[test]
    fn test_order_deserialize() {
        let json = r#"{
            "id": 9,
            "status": "delivered",
            "total": 1250.5,
            "created_at": "2024-11-02T10:30:00Z",
            "items": [{"product_id": 7, "quantity": 2, "unit_price": 625.25}]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
    }
}
