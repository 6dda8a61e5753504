//! Backend Client
//!
//! Thin reqwest wrapper over the REST backend. All endpoints exchange JSON
//! bodies wrapped in a `{ "data": ... }` envelope; an optional bearer token
//! is forwarded unchanged on every request.
//!
//! A non-success status maps to `BackendError::Status`; a body that does
//! not decode into the expected shape maps to `MalformedResponse`, which
//! callers treat exactly like any other fetch failure.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{BackendError, Result};
use crate::models::{Address, Category, Order, Pricing, Product};

/// Standard response envelope around every backend payload.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    data: T,
}

// == Product Query ==
/// Filters for a product listing request.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub category_id: Option<u32>,
    /// Restrict stock/pricing to these stores
    pub store_ids: Vec<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub deals_only: bool,
}

impl ProductQuery {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.category_id {
            pairs.push(("category_id".to_string(), id.to_string()));
        }
        if !self.store_ids.is_empty() {
            let ids: Vec<String> = self.store_ids.iter().map(u32::to_string).collect();
            pairs.push(("store_ids".to_string(), ids.join(",")));
        }
        if let Some(lat) = self.latitude {
            pairs.push(("latitude".to_string(), lat.to_string()));
        }
        if let Some(lon) = self.longitude {
            pairs.push(("longitude".to_string(), lon.to_string()));
        }
        if self.deals_only {
            pairs.push(("deals_only".to_string(), "true".to_string()));
        }
        pairs
    }
}

// == Backend Client ==
/// Client for the storefront backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl BackendClient {
    // == Constructor ==
    /// Creates a client for the given base URL; the token, when present,
    /// is sent as a bearer credential on every request.
    pub fn new(base_url: impl Into<String>, bearer_token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token,
        }
    }

    // == Products ==
    /// Fetches the product list matching the query.
    pub async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        self.get_json("/products", &query.query_pairs()).await
    }

    /// Fetches products for every subcategory of a parent category,
    /// grouped by subcategory id.
    pub async fn fetch_subcategory_products(
        &self,
        parent_id: u32,
        query: &ProductQuery,
    ) -> Result<HashMap<u32, Vec<Product>>> {
        let path = format!("/categories/{parent_id}/subcategory-products");
        self.get_json(&path, &query.query_pairs()).await
    }

    // == Categories ==
    /// Fetches categories; top-level when `parent_id` is None, otherwise
    /// the children of the given category.
    pub async fn fetch_categories(&self, parent_id: Option<u32>) -> Result<Vec<Category>> {
        let mut pairs = Vec::new();
        if let Some(id) = parent_id {
            pairs.push(("parent_id".to_string(), id.to_string()));
        }
        self.get_json("/categories", &pairs).await
    }

    // == Pricing ==
    /// Fetches calculated pricing for a single product.
    pub async fn fetch_product_pricing(
        &self,
        product_id: u32,
        tier_id: u32,
        quantity: u32,
    ) -> Result<Pricing> {
        let path = format!("/pricing/calculate/product/{product_id}");
        let pairs = vec![
            ("tier_id".to_string(), tier_id.to_string()),
            ("quantity".to_string(), quantity.to_string()),
        ];
        self.get_json(&path, &pairs).await
    }

    // == Account ==
    /// Fetches the caller's saved addresses.
    pub async fn fetch_addresses(&self) -> Result<Vec<Address>> {
        self.get_json("/users/me/addresses", &[]).await
    }

    /// Fetches the caller's order history.
    pub async fn fetch_orders(&self) -> Result<Vec<Order>> {
        self.get_json("/users/me/orders", &[]).await
    }

    // == Transport ==
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "backend request");

        let mut request = self.http.get(&url).query(query);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|err| BackendError::MalformedResponse(err.to_string()))?;
        Ok(envelope.data)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = BackendClient::new("http://localhost:8000/", None);
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_query_pairs_full() {
        let query = ProductQuery {
            category_id: Some(5),
            store_ids: vec![1, 2],
            latitude: Some(6.9271),
            longitude: Some(79.8612),
            deals_only: true,
        };
        let pairs = query.query_pairs();
        assert!(pairs.contains(&("category_id".to_string(), "5".to_string())));
        assert!(pairs.contains(&("store_ids".to_string(), "1,2".to_string())));
        assert!(pairs.contains(&("deals_only".to_string(), "true".to_string())));
    }

    #[test]
    fn test_query_pairs_empty_by_default() {
        assert!(ProductQuery::default().query_pairs().is_empty());
    }

    #[test]
    fn test_envelope_deserialize() {
        let json = r#"{"data": [{"id": 1, "name": "Rice"}]}"#;
        let envelope: ApiEnvelope<Vec<Product>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.len(), 1);
    }

    #[test]
    fn test_envelope_missing_data_is_malformed() {
        let json = r#"{"items": []}"#;
        let result: std::result::Result<ApiEnvelope<Vec<Product>>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
