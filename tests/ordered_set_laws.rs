//! Property-based tests for `OrderedSet` and the fork-join builder.
//!
//! These tests verify the laws the set guarantees for any insert/merge/build
//! history, using proptest with `BTreeSet` as the reference model.

use proptest::prelude::*;
use std::collections::BTreeSet;
use wordset::persistent::{OrderedSet, parallel};

/// Reference result: sorted, deduplicated copy of the elements.
fn sorted_deduplicated(elements: &[i32]) -> Vec<i32> {
    elements.iter().copied().collect::<BTreeSet<i32>>().into_iter().collect()
}

// =============================================================================
// Ordering and Model Laws
// =============================================================================

proptest! {
    /// Law: in-order extraction is strictly ascending for any insert history.
    #[test]
    fn prop_to_sorted_vec_is_strictly_ascending(
        elements in prop::collection::vec(any::<i32>(), 0..200)
    ) {
        let set: OrderedSet<i32> = elements.into_iter().collect();
        let sorted = set.to_sorted_vec();
        prop_assert!(sorted.windows(2).all(|window| window[0] < window[1]));
    }

    /// Law: the set behaves like a sorted, deduplicated sequence.
    #[test]
    fn prop_set_matches_reference_model(
        elements in prop::collection::vec(any::<i32>(), 0..200)
    ) {
        let set: OrderedSet<i32> = elements.iter().copied().collect();
        prop_assert_eq!(set.to_sorted_vec(), sorted_deduplicated(&elements));
        prop_assert_eq!(set.len(), sorted_deduplicated(&elements).len());
    }

    /// Law: membership agrees with the reference model.
    #[test]
    fn prop_contains_matches_reference_model(
        elements in prop::collection::vec(-50i32..50, 0..100),
        probe in -50i32..50
    ) {
        let set: OrderedSet<i32> = elements.iter().copied().collect();
        prop_assert_eq!(set.contains(&probe), elements.contains(&probe));
    }
}

// =============================================================================
// Insert Laws
// =============================================================================

proptest! {
    /// Law: inserting the same element twice equals inserting it once.
    #[test]
    fn prop_insert_is_idempotent(
        elements in prop::collection::vec(any::<i32>(), 0..100),
        element: i32
    ) {
        let set: OrderedSet<i32> = elements.into_iter().collect();
        let once = set.insert(element);
        let twice = once.insert(element);
        prop_assert_eq!(once.to_sorted_vec(), twice.to_sorted_vec());
    }

    /// Law: insert never changes the receiver (persistence).
    #[test]
    fn prop_insert_preserves_previous_version(
        elements in prop::collection::vec(any::<i32>(), 0..100),
        element: i32
    ) {
        let set: OrderedSet<i32> = elements.into_iter().collect();
        let before = set.to_sorted_vec();
        let _updated = set.insert(element);
        prop_assert_eq!(set.to_sorted_vec(), before);
    }
}

// =============================================================================
// Merge Laws
// =============================================================================

proptest! {
    /// Law: merge yields the sorted deduplicated union of the two inputs.
    #[test]
    fn prop_merge_is_union(
        left_elements in prop::collection::vec(any::<i32>(), 0..100),
        right_elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let left: OrderedSet<i32> = left_elements.iter().copied().collect();
        let right: OrderedSet<i32> = right_elements.iter().copied().collect();

        let mut union = left_elements;
        union.extend(right_elements);

        prop_assert_eq!(left.merge(&right).to_sorted_vec(), sorted_deduplicated(&union));
    }

    /// Law: merge contents are symmetric in their arguments.
    #[test]
    fn prop_merge_contents_are_symmetric(
        left_elements in prop::collection::vec(any::<i32>(), 0..80),
        right_elements in prop::collection::vec(any::<i32>(), 0..80)
    ) {
        let left: OrderedSet<i32> = left_elements.into_iter().collect();
        let right: OrderedSet<i32> = right_elements.into_iter().collect();
        prop_assert_eq!(
            left.merge(&right).to_sorted_vec(),
            right.merge(&left).to_sorted_vec()
        );
    }

    /// Law: merge leaves both inputs unchanged.
    #[test]
    fn prop_merge_preserves_inputs(
        left_elements in prop::collection::vec(any::<i32>(), 0..80),
        right_elements in prop::collection::vec(any::<i32>(), 0..80)
    ) {
        let left: OrderedSet<i32> = left_elements.into_iter().collect();
        let right: OrderedSet<i32> = right_elements.into_iter().collect();
        let left_before = left.to_sorted_vec();
        let right_before = right.to_sorted_vec();

        let _merged = left.merge(&right);

        prop_assert_eq!(left.to_sorted_vec(), left_before);
        prop_assert_eq!(right.to_sorted_vec(), right_before);
    }
}

// =============================================================================
// Parallel/Sequential Equivalence Laws
// =============================================================================

proptest! {
    /// Law: the fork-join builder is observably equal to the sequential fold.
    #[test]
    fn prop_parallel_build_equals_sequential_fold(
        elements in prop::collection::vec(any::<i32>(), 0..300)
    ) {
        let from_build = parallel::build(elements.clone());
        let from_fold: OrderedSet<i32> = elements.into_iter().collect();
        prop_assert_eq!(from_build.to_sorted_vec(), from_fold.to_sorted_vec());
    }
}
