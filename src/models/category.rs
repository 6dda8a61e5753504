//! Category model

use serde::{Deserialize, Serialize};

/// A product category; `parent_id` is None for top-level categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub parent_id: Option<u32>,
}

impl Category {
    /// Returns true when this is a subcategory of another category.
    pub fn is_subcategory(&self) -> bool {
        self.parent_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_deserialize() {
        let json = r#"{"id": 5, "name": "Produce", "slug": "produce"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, 5);
        assert!(!category.is_subcategory());
    }

    #[test]
    fn test_subcategory() {
        let json = r#"{"id": 12, "name": "Fruit", "parent_id": 5}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert!(category.is_subcategory());
    }
}
