//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the key-building contract and store behavior
//! across arbitrary inputs.

use proptest::prelude::*;

use crate::cache::{build_key, matches_category, matches_store, CachePayload, ProductCache};
use crate::models::Product;

// == Test Configuration ==
const TEST_TTL_MS: u64 = 5 * 60 * 1000;

// == Strategies ==
/// Generates an optional id in a range wide enough to hit prefix overlaps
/// (1 vs 10 vs 100).
fn id_strategy() -> impl Strategy<Value = Option<u32>> {
    prop_oneof![Just(None), (1u32..500).prop_map(Some)]
}

fn payload_strategy() -> impl Strategy<Value = CachePayload> {
    (0usize..5).prop_map(|count| {
        let list = (0..count as u32)
            .map(|id| Product {
                id,
                name: format!("product-{id}"),
                slug: String::new(),
                category_id: None,
                in_stock: true,
                pricing: None,
            })
            .collect();
        CachePayload::ProductList(list)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Identical inputs always yield the identical key.
    #[test]
    fn prop_key_determinism(
        category in id_strategy(),
        deals in any::<bool>(),
        store in id_strategy()
    ) {
        prop_assert_eq!(
            build_key(category, deals, store),
            build_key(category, deals, store)
        );
    }

    // Distinct semantic inputs never collide.
    #[test]
    fn prop_key_distinctness(
        a in (id_strategy(), any::<bool>(), id_strategy()),
        b in (id_strategy(), any::<bool>(), id_strategy())
    ) {
        let key_a = build_key(a.0, a.1, a.2);
        let key_b = build_key(b.0, b.1, b.2);
        if a != b {
            prop_assert_ne!(key_a, key_b, "distinct inputs {:?} and {:?} collided", a, b);
        } else {
            prop_assert_eq!(key_a, key_b);
        }
    }

    // Scope predicates recognize exactly the ids a key was built from.
    #[test]
    fn prop_scope_predicates_match_own_ids(
        category in 1u32..500,
        deals in any::<bool>(),
        store in 1u32..500,
        other in 1u32..500
    ) {
        let key = build_key(Some(category), deals, Some(store));
        prop_assert!(matches_category(&key, category));
        prop_assert!(matches_store(&key, store));
        if other != category {
            prop_assert!(!matches_category(&key, other));
        }
        if other != store {
            prop_assert!(!matches_store(&key, other));
        }
    }

    // set followed by get_fresh returns the payload unchanged.
    #[test]
    fn prop_roundtrip_storage(
        category in id_strategy(),
        deals in any::<bool>(),
        store in id_strategy(),
        payload in payload_strategy()
    ) {
        let mut cache = ProductCache::new(16, TEST_TTL_MS);
        let key = build_key(category, deals, store);

        cache.set(key.clone(), payload.clone());

        prop_assert_eq!(cache.get_fresh(&key), Some(&payload));
    }

    // The entry count never exceeds the capacity bound.
    #[test]
    fn prop_capacity_enforcement(
        writes in prop::collection::vec((id_strategy(), any::<bool>(), id_strategy()), 1..120)
    ) {
        let max_entries = 10;
        let mut cache = ProductCache::new(max_entries, TEST_TTL_MS);

        for (category, deals, store) in writes {
            cache.set(build_key(category, deals, store), CachePayload::ProductList(Vec::new()));
            prop_assert!(
                cache.len() <= max_entries,
                "cache size {} exceeds max {}",
                cache.len(),
                max_entries
            );
        }
    }

    // Removing one category leaves every other entry untouched.
    #[test]
    fn prop_scoped_removal_precision(
        categories in prop::collection::hash_set(1u32..50, 2..10),
        target_index in 0usize..10
    ) {
        let categories: Vec<u32> = categories.into_iter().collect();
        let target = categories[target_index % categories.len()];

        let mut cache = ProductCache::new(64, TEST_TTL_MS);
        for &category in &categories {
            cache.set(build_key(Some(category), false, None), CachePayload::ProductList(Vec::new()));
        }

        let removed = cache.remove_category(target);

        prop_assert_eq!(removed, 1);
        for &category in &categories {
            let key = build_key(Some(category), false, None);
            if category == target {
                prop_assert!(cache.get(&key).is_none());
            } else {
                prop_assert!(cache.get(&key).is_some(), "category {} was wrongly removed", category);
            }
        }
    }
}
