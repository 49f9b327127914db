//! LockSetTable - hash-consed store of canonical locksets
//!
//! ## Algorithm
//! 1. Every lockset is an immutable, ascending-sorted sequence of distinct
//!    lock identities held in a growable arena
//! 2. Canonicalization: structural hash → candidate indices → structural
//!    equality check against each candidate (guards hash collisions)
//! 3. `add` / `remove` / `intersect` are memoized by input key, so the steady
//!    state of a monitored program costs one hash lookup per operation
//!
//! ## Performance
//! - Time: O(1) amortized per operation (memo hit); O(n) cold path
//!   (binary search + copy), n bounded by locks held simultaneously
//! - Space: O(distinct locksets observed)

use super::super::domain::LockSetIndex;
use crate::shared::models::ProcessTrackedObjectId;
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::{Hash, Hasher};

/// Canonical store of sorted lock sequences, referenced by small handles
///
/// The table is append-only: canonical sets live for the analysis session and
/// their handles stay valid. All operations are total; the table never
/// signals errors.
pub struct LockSetTable {
    sets: Vec<Box<[ProcessTrackedObjectId]>>,
    hash_to_indices: FxHashMap<u64, Vec<LockSetIndex>>,
    intersect_cache: FxHashMap<(LockSetIndex, LockSetIndex), LockSetIndex>,
    add_cache: FxHashMap<(LockSetIndex, ProcessTrackedObjectId), LockSetIndex>,
    remove_cache: FxHashMap<(LockSetIndex, ProcessTrackedObjectId), LockSetIndex>,
}

impl LockSetTable {
    /// Create a table with the empty set pre-registered at index 0
    pub fn new() -> Self {
        let empty: Box<[ProcessTrackedObjectId]> = Box::new([]);
        let empty_hash = structural_hash(&empty);

        let mut hash_to_indices = FxHashMap::default();
        hash_to_indices.insert(empty_hash, vec![LockSetIndex::EMPTY]);

        Self {
            sets: vec![empty],
            hash_to_indices,
            intersect_cache: FxHashMap::default(),
            add_cache: FxHashMap::default(),
            remove_cache: FxHashMap::default(),
        }
    }

    /// Number of distinct canonical locksets, including the empty set
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        // The empty lockset is always registered
        false
    }

    /// Locks of a canonical set, in ascending order
    pub fn resolve(&self, index: LockSetIndex) -> &[ProcessTrackedObjectId] {
        &self.sets[index.value()]
    }

    /// Intersection of two canonical sets
    ///
    /// Commutative and idempotent: `intersect(a, b) == intersect(b, a)` and
    /// `intersect(a, a) == a`. Memoized under the unordered pair key.
    pub fn intersect(&mut self, first: LockSetIndex, second: LockSetIndex) -> LockSetIndex {
        if first.is_empty() || second.is_empty() {
            return LockSetIndex::EMPTY;
        }

        if first == second {
            return first;
        }

        let cache_key = if first <= second {
            (first, second)
        } else {
            (second, first)
        };
        if let Some(&cached) = self.intersect_cache.get(&cache_key) {
            return cached;
        }

        let intersection =
            sorted_intersection(&self.sets[first.value()], &self.sets[second.value()]);
        let result = self.get_or_create(intersection);

        self.intersect_cache.insert(cache_key, result);
        result
    }

    /// Set with one lock added; returns the same index if already present
    pub fn add(&mut self, index: LockSetIndex, lock_id: ProcessTrackedObjectId) -> LockSetIndex {
        let cache_key = (index, lock_id);
        if let Some(&cached) = self.add_cache.get(&cache_key) {
            return cached;
        }

        let existing = &self.sets[index.value()];
        let result = match existing.binary_search(&lock_id) {
            Ok(_) => index,
            Err(insertion_point) => {
                let mut new_set = Vec::with_capacity(existing.len() + 1);
                new_set.extend_from_slice(&existing[..insertion_point]);
                new_set.push(lock_id);
                new_set.extend_from_slice(&existing[insertion_point..]);
                self.get_or_create(new_set)
            }
        };

        self.add_cache.insert(cache_key, result);
        result
    }

    /// Set with one lock removed; returns the same index if absent
    pub fn remove(&mut self, index: LockSetIndex, lock_id: ProcessTrackedObjectId) -> LockSetIndex {
        if index.is_empty() {
            return index;
        }

        let cache_key = (index, lock_id);
        if let Some(&cached) = self.remove_cache.get(&cache_key) {
            return cached;
        }

        let existing = &self.sets[index.value()];
        let result = match existing.binary_search(&lock_id) {
            Err(_) => index,
            Ok(remove_index) => {
                let mut new_set = Vec::with_capacity(existing.len() - 1);
                new_set.extend_from_slice(&existing[..remove_index]);
                new_set.extend_from_slice(&existing[remove_index + 1..]);
                self.get_or_create(new_set)
            }
        };

        self.remove_cache.insert(cache_key, result);
        result
    }

    /// Canonicalize a sorted sequence: reuse a structurally equal set if one
    /// is registered, otherwise allocate a new index
    fn get_or_create(&mut self, sorted_locks: Vec<ProcessTrackedObjectId>) -> LockSetIndex {
        let hash = structural_hash(&sorted_locks);

        if let Some(candidates) = self.hash_to_indices.get(&hash) {
            for &candidate in candidates {
                // Verify structural equality; the hash alone is not identity
                if *self.sets[candidate.value()] == *sorted_locks {
                    return candidate;
                }
            }
        }

        let new_index = LockSetIndex::new(self.sets.len());
        self.sets.push(sorted_locks.into_boxed_slice());
        self.hash_to_indices.entry(hash).or_default().push(new_index);
        new_index
    }
}

impl Default for LockSetTable {
    fn default() -> Self {
        Self::new()
    }
}

fn structural_hash(locks: &[ProcessTrackedObjectId]) -> u64 {
    let mut hasher = FxHasher::default();
    for lock_id in locks {
        lock_id.hash(&mut hasher);
    }
    hasher.finish()
}

fn sorted_intersection(
    set_a: &[ProcessTrackedObjectId],
    set_b: &[ProcessTrackedObjectId],
) -> Vec<ProcessTrackedObjectId> {
    let mut intersection = Vec::new();
    let mut index_a = 0;
    let mut index_b = 0;

    while index_a < set_a.len() && index_b < set_b.len() {
        match set_a[index_a].cmp(&set_b[index_b]) {
            std::cmp::Ordering::Equal => {
                intersection.push(set_a[index_a]);
                index_a += 1;
                index_b += 1;
            }
            std::cmp::Ordering::Less => index_a += 1,
            std::cmp::Ordering::Greater => index_b += 1,
        }
    }

    intersection
}
