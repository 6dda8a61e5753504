//! Cache Key Module
//!
//! Deterministic composite keys for (category, deals flag, store) tuples,
//! plus the scope predicates used by targeted invalidation.

/// Sentinel for "all categories" when no category id is given.
const CATEGORY_ALL: &str = "all";

/// Sentinel for "no store selected".
const STORE_NONE: &str = "null";

// == Build Key ==
/// Derives the cache key for a (category, deals, store) combination.
///
/// Pure function: identical inputs always yield the identical string, and
/// distinct inputs never collide because ids are decimal and the separator
/// never appears inside a segment.
///
/// Examples: `cat:5:deals:false:store:null`, `cat:all:deals:true:store:3`.
pub fn build_key(category_id: Option<u32>, deals_only: bool, store_id: Option<u32>) -> String {
    let category = category_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| CATEGORY_ALL.to_string());
    let store = store_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| STORE_NONE.to_string());
    format!("cat:{category}:deals:{deals_only}:store:{store}")
}

// == Scope Predicates ==
/// True when the key was built for the given category id.
pub fn matches_category(key: &str, category_id: u32) -> bool {
    key.starts_with(&format!("cat:{category_id}:"))
}

/// True when the key was built for the given store id.
pub fn matches_store(key: &str, store_id: u32) -> bool {
    key.ends_with(&format!(":store:{store_id}"))
}
