//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the lookup guarantees over random tables and queries.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::cache::{FallbackCache, Key, Slot};
use crate::error::CacheError;

// == Test Configuration ==
const PRIORITY: [&str; 4] = ["id", "salesRef", "country", "underlying"];

// == Strategies ==
/// Small value domain so generated entries collide with queries often
fn value_strategy() -> impl Strategy<Value = String> {
    "[A-C]"
}

fn slot_strategy() -> impl Strategy<Value = Slot> {
    prop::option::weighted(0.6, value_strategy())
        .prop_map(|v| v.map_or(Slot::Unspecified, |s| Slot::from(s.as_str())))
}

/// Fully concrete query over the priority attributes
fn query_strategy() -> impl Strategy<Value = Key> {
    prop::collection::vec(value_strategy(), PRIORITY.len()).prop_map(|values| {
        Key::new(
            PRIORITY
                .iter()
                .zip(values)
                .map(|(name, v)| (*name, Slot::from(v.as_str()))),
        )
    })
}

/// Stored key shape: any mix of concrete and unspecified slots
fn stored_key_strategy() -> impl Strategy<Value = Key> {
    prop::collection::vec(slot_strategy(), PRIORITY.len())
        .prop_map(|slots| Key::new(PRIORITY.iter().copied().zip(slots)))
}

fn table_strategy() -> impl Strategy<Value = Vec<Key>> {
    prop::collection::vec(stored_key_strategy(), 0..40)
}

fn build_cache(keys: &[Key]) -> (FallbackCache<usize>, HashMap<Key, usize>) {
    let mut cache = FallbackCache::new(PRIORITY).unwrap();
    let mut model = HashMap::new();
    for (i, key) in keys.iter().enumerate() {
        cache.put(key.clone(), i);
        model.insert(key.clone(), i);
    }
    (cache, model)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // An entry stored under the query key itself always wins.
    #[test]
    fn prop_exact_hit_priority(keys in table_strategy(), query in query_strategy()) {
        let (mut cache, _) = build_cache(&keys);
        cache.put(query.clone(), usize::MAX);

        let matched = cache.match_entry(&query).unwrap().unwrap();
        prop_assert_eq!(*matched.value, usize::MAX);
        prop_assert_eq!(matched.relaxed, 0);
    }

    // Lookup returns the first probe, in relaxation order, present in storage.
    #[test]
    fn prop_monotone_relaxation(keys in table_strategy(), query in query_strategy()) {
        let (cache, model) = build_cache(&keys);

        let probes = cache.probe_sequence(&query).unwrap();
        prop_assert_eq!(probes.len(), PRIORITY.len());

        for (relaxed, probe) in probes.iter().enumerate() {
            let cut = PRIORITY.len() - relaxed;
            for (pos, name) in PRIORITY.iter().enumerate() {
                if pos < cut {
                    prop_assert_eq!(probe.slot(name), query.slot(name));
                } else {
                    prop_assert_eq!(probe.slot(name), Some(&Slot::Unspecified));
                }
            }
        }

        let expected = probes
            .iter()
            .enumerate()
            .find_map(|(relaxed, probe)| model.get(probe).map(|v| (*v, relaxed)));
        let actual = cache
            .match_entry(&query)
            .unwrap()
            .map(|m| (*m.value, m.relaxed));
        prop_assert_eq!(actual, expected);
    }

    // When the leading attribute never matches, the result is empty, not an error.
    #[test]
    fn prop_no_match_is_empty(keys in table_strategy(), query in query_strategy()) {
        let keys: Vec<Key> = keys
            .into_iter()
            .filter(|k| k.slot("id") != query.slot("id"))
            .collect();
        let (cache, _) = build_cache(&keys);

        prop_assert_eq!(cache.match_key(&query), Ok(None));
    }

    // A query missing any priority slot is rejected whatever the table holds.
    #[test]
    fn prop_validation_independent_of_storage(
        keys in table_strategy(),
        query in query_strategy(),
        dropped in 0..PRIORITY.len()
    ) {
        let (mut cache, _) = build_cache(&keys);
        cache.put(query.clone(), usize::MAX);

        let partial = Key::new(
            query
                .as_map()
                .iter()
                .filter(|(name, _)| name.as_str() != PRIORITY[dropped])
                .map(|(name, slot)| (name.clone(), slot.clone())),
        );

        let result = cache.match_key(&partial);
        prop_assert!(matches!(result, Err(CacheError::InvalidKey(_))));
        prop_assert!(cache.probe_sequence(&partial).is_err());
    }

    // Re-putting a key replaces its value and never adds an entry.
    #[test]
    fn prop_put_idempotent(keys in table_strategy(), key in stored_key_strategy()) {
        let (mut cache, _) = build_cache(&keys);
        cache.put(key.clone(), usize::MAX - 1);
        let len = cache.len();

        let previous = cache.put(key.clone(), usize::MAX);
        prop_assert_eq!(previous, Some(usize::MAX - 1));
        prop_assert_eq!(cache.len(), len);
        prop_assert_eq!(cache.get(&key), Some(&usize::MAX));
    }
}
