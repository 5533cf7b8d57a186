//! Unit tests for TreeMap.
//!
//! Scenario tests for construction, insertion, removal, lookup and copy
//! semantics, checking the red-black invariants after every mutation.

mod common;

use common::{init_tracing, keys_of, numbered};
use rbtree_map::TreeMap;
use rstest::{fixture, rstest};

/// Seven keys inserted in ascending order.
///
/// The resulting tree is `20(B) -> [10(B), 40(R) -> [30(B), 60(B) -> [50(R), 70(R)]]]`,
/// so removing the root swaps in a black leaf and needs the delete fixup.
#[fixture]
fn seven() -> TreeMap<i32, String> {
    numbered((1..=7).map(|key| key * 10))
}

// =============================================================================
// Basic Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_map() {
    let map: TreeMap<i32, String> = TreeMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.validate(), Ok(()));
}

#[rstest]
fn test_default_creates_empty_map() {
    let map: TreeMap<i32, String> = TreeMap::default();
    assert!(map.is_empty());
    assert_eq!(map.begin(), map.end());
}

#[rstest]
fn test_literal_construction_later_duplicates_win() {
    let map = TreeMap::from([(1, "a"), (2, "b"), (1, "c"), (3, "d"), (2, "e")]);

    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&1), Some(&"c"));
    assert_eq!(map.get(&2), Some(&"e"));
    assert_eq!(map.get(&3), Some(&"d"));
}

#[rstest]
fn test_from_iter_and_extend() {
    let mut map: TreeMap<i32, i32> = (0..10).map(|key| (key, key)).collect();
    map.extend((5..15).map(|key| (key, -key)));

    assert_eq!(map.len(), 15);
    assert_eq!(map.get(&4), Some(&4));
    assert_eq!(map.get(&5), Some(&-5));
    assert_eq!(map.validate(), Ok(()));
}

// =============================================================================
// Insert Tests
// =============================================================================

#[rstest]
fn test_insert_then_find_round_trips() {
    let mut map = TreeMap::new();
    map.insert("key".to_string(), 7);

    assert_eq!(map.find("key").entry(), Some(("key".to_string(), 7)));
}

#[rstest]
fn test_insert_overwrite_keeps_length() {
    let mut map = TreeMap::new();
    assert_eq!(map.insert(1, "v1"), None);
    assert_eq!(map.insert(1, "v2"), Some("v1"));

    assert_eq!(map.len(), 1);
    assert_eq!(map.find(&1).entry(), Some((1, "v2")));
}

#[rstest]
#[case::ascending((0..200).collect())]
#[case::descending((0..200).rev().collect())]
#[case::zigzag((0..100).flat_map(|key| [key, 199 - key]).collect())]
fn test_insert_orders_keep_invariants(#[case] keys: Vec<i32>) {
    init_tracing();
    let mut map = TreeMap::new();
    for key in keys {
        map.insert(key, key);
        assert_eq!(map.validate(), Ok(()));
    }

    assert_eq!(map.len(), 200);
    assert_eq!(keys_of(&map), (0..200).collect::<Vec<_>>());
}

#[rstest]
fn test_three_ascending_inserts_rebalance() {
    let map = numbered([10, 20, 30]);

    assert_eq!(keys_of(&map), vec![10, 20, 30]);
    assert_eq!(map.height(), 2);
    assert_eq!(map.black_height(), 1);
    assert_eq!(map.validate(), Ok(()));
}

// =============================================================================
// Remove Tests
// =============================================================================

#[rstest]
fn test_remove_root_of_seven_node_tree(mut seven: TreeMap<i32, String>) {
    init_tracing();
    assert_eq!(seven.height(), 4);
    assert_eq!(seven.remove(&20), Some("20".to_string()));

    assert_eq!(seven.validate(), Ok(()));
    assert_eq!(keys_of(&seven), vec![10, 30, 40, 50, 60, 70]);
    assert_eq!(seven.get(&10), Some(&"10".to_string()));
    assert_eq!(seven.len(), 6);
    assert_eq!(seven.black_height(), 2);
}

#[rstest]
fn test_remove_then_find_is_end(mut seven: TreeMap<i32, String>) {
    seven.remove(&30);
    assert_eq!(seven.find(&30), seven.end());
}

#[rstest]
fn test_remove_absent_key_is_silent(mut seven: TreeMap<i32, String>) {
    assert_eq!(seven.remove(&35), None);
    assert_eq!(seven.len(), 7);
}

#[rstest]
fn test_remove_on_empty_map_is_silent() {
    let mut map: TreeMap<i32, i32> = TreeMap::new();
    assert_eq!(map.remove(&1), None);
    assert!(map.is_empty());
}

#[rstest]
fn test_remove_everything_root_first(seven: TreeMap<i32, String>) {
    let mut map = seven;
    for key in [20, 40, 10, 60, 30, 50, 70] {
        assert!(map.remove(&key).is_some());
        assert_eq!(map.validate(), Ok(()));
    }
    assert!(map.is_empty());
    assert_eq!(map.begin(), map.end());
}

#[rstest]
fn test_remove_keeps_values_attached_to_keys() {
    let mut map = numbered(0..64);
    for key in (0..64).step_by(2) {
        map.remove(&key);
    }
    for (key, value) in &map {
        assert_eq!(value, &key.to_string());
    }
    assert_eq!(map.len(), 32);
}

#[rstest]
fn test_size_counts_distinct_keys() {
    let mut map = TreeMap::new();
    for key in [5, 3, 5, 8, 3, 1] {
        map.insert(key, ());
    }
    assert_eq!(map.len(), 4);

    for key in [3, 3, 9] {
        map.remove(&key);
    }
    assert_eq!(map.len(), 3);
}

// =============================================================================
// Lower Bound Tests
// =============================================================================

#[rstest]
#[case(4, Some(5))]
#[case(7, Some(7))]
#[case(8, None)]
#[case(-1, Some(1))]
fn test_lower_bound_on_odd_keys(#[case] query: i32, #[case] expected: Option<i32>) {
    let map: TreeMap<i32, ()> = [1, 3, 5, 7].into_iter().map(|key| (key, ())).collect();
    let cursor = map.lower_bound(&query);

    assert_eq!(cursor.key().copied(), expected);
    assert_eq!(cursor.is_end(), expected.is_none());
}

// =============================================================================
// Copy Tests
// =============================================================================

#[rstest]
fn test_copy_construction_is_deep(seven: TreeMap<i32, String>) {
    let mut copy = seven.clone();
    copy.insert(10, "changed".to_string());
    copy.remove(&70);

    assert_eq!(seven.get(&10), Some(&"10".to_string()));
    assert!(seven.contains_key(&70));
    assert_eq!(copy.validate(), Ok(()));
}

#[rstest]
fn test_copy_assignment_replaces_contents(seven: TreeMap<i32, String>) {
    let mut target = numbered([1, 2, 3]);
    target.clone_from(&seven);

    assert_eq!(target, seven);
    assert!(!target.contains_key(&1));
    assert_eq!(target.validate(), Ok(()));
}

#[rstest]
fn test_self_copy_round_trip(seven: TreeMap<i32, String>) {
    let copy = seven.clone();
    assert_eq!(copy.iter().collect::<Vec<_>>(), seven.iter().collect::<Vec<_>>());
}

// =============================================================================
// Accessor Tests
// =============================================================================

#[rstest]
fn test_get_mut_updates_in_place(mut seven: TreeMap<i32, String>) {
    if let Some(value) = seven.get_mut(&20) {
        value.push('!');
    }
    assert_eq!(seven[&20], "20!");
    assert_eq!(seven.len(), 7);
}

#[rstest]
fn test_first_and_last(seven: TreeMap<i32, String>) {
    assert_eq!(seven.first_key_value(), Some((&10, &"10".to_string())));
    assert_eq!(seven.last_key_value(), Some((&70, &"70".to_string())));
}

#[rstest]
fn test_into_iter_yields_sorted_owned_entries(seven: TreeMap<i32, String>) {
    let entries: Vec<(i32, String)> = seven.into_iter().collect();
    let keys: Vec<i32> = entries.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, vec![10, 20, 30, 40, 50, 60, 70]);
}

#[rstest]
fn test_shrink_to_fit_after_removals() {
    let mut map = numbered(0..100);
    for key in 50..100 {
        map.remove(&key);
    }
    map.shrink_to_fit();

    assert_eq!(map.len(), 50);
    assert_eq!(map.validate(), Ok(()));
    map.insert(1_000, "1000".to_string());
    assert_eq!(map.validate(), Ok(()));
}
