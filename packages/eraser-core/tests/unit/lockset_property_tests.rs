// LockSetTable property tests
//
// Algebraic laws of the hash-consed lockset store, checked over arbitrary
// lock populations and insertion orders.

use eraser_core::{LockSetIndex, LockSetTable, ProcessId, ProcessTrackedObjectId, TrackedObjectId};
use proptest::prelude::*;

fn lock(id: u64) -> ProcessTrackedObjectId {
    ProcessTrackedObjectId::new(ProcessId(1), TrackedObjectId(id))
}

/// Build a canonical set by adding locks in the given order
fn build_set(table: &mut LockSetTable, lock_ids: &[u64]) -> LockSetIndex {
    lock_ids
        .iter()
        .fold(LockSetIndex::EMPTY, |set, &id| table.add(set, lock(id)))
}

proptest! {
    #[test]
    fn prop_intersect_commutes(
        a in proptest::collection::vec(0u64..32, 0..8),
        b in proptest::collection::vec(0u64..32, 0..8),
    ) {
        let mut table = LockSetTable::new();
        let set_a = build_set(&mut table, &a);
        let set_b = build_set(&mut table, &b);

        prop_assert_eq!(table.intersect(set_a, set_b), table.intersect(set_b, set_a));
    }

    #[test]
    fn prop_intersect_idempotent(a in proptest::collection::vec(0u64..32, 0..8)) {
        let mut table = LockSetTable::new();
        let set_a = build_set(&mut table, &a);

        prop_assert_eq!(table.intersect(set_a, set_a), set_a);
        prop_assert_eq!(table.intersect(set_a, LockSetIndex::EMPTY), LockSetIndex::EMPTY);
    }

    #[test]
    fn prop_insertion_order_is_irrelevant(mut ids in proptest::collection::vec(0u64..64, 0..10)) {
        let mut table = LockSetTable::new();
        let in_order = build_set(&mut table, &ids);

        ids.reverse();
        let reversed = build_set(&mut table, &ids);

        prop_assert_eq!(in_order, reversed);
    }

    #[test]
    fn prop_add_then_remove_restores_set(
        base in proptest::collection::vec(0u64..32, 0..8),
        extra in 100u64..200,
    ) {
        let mut table = LockSetTable::new();
        let set = build_set(&mut table, &base);

        // `extra` is outside the base range, so it is genuinely new
        let added = table.add(set, lock(extra));
        prop_assert_ne!(added, set);
        prop_assert_eq!(table.remove(added, lock(extra)), set);
    }

    #[test]
    fn prop_intersection_is_subset_of_both(
        a in proptest::collection::vec(0u64..32, 0..8),
        b in proptest::collection::vec(0u64..32, 0..8),
    ) {
        let mut table = LockSetTable::new();
        let set_a = build_set(&mut table, &a);
        let set_b = build_set(&mut table, &b);
        let result = table.intersect(set_a, set_b);

        let locks_a: Vec<_> = table.resolve(set_a).to_vec();
        let locks_b: Vec<_> = table.resolve(set_b).to_vec();
        for lock_id in table.resolve(result) {
            prop_assert!(locks_a.contains(lock_id));
            prop_assert!(locks_b.contains(lock_id));
        }
    }

    #[test]
    fn prop_resolved_sets_are_sorted_and_distinct(ids in proptest::collection::vec(0u64..64, 0..12)) {
        let mut table = LockSetTable::new();
        let set = build_set(&mut table, &ids);
        let locks = table.resolve(set);

        prop_assert!(locks.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn test_add_remove_roundtrip_on_empty() {
    let mut table = LockSetTable::new();
    let s1 = table.add(LockSetIndex::EMPTY, lock(1));
    assert_eq!(table.remove(s1, lock(1)), LockSetIndex::EMPTY);
}
