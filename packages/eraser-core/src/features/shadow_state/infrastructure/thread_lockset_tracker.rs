/// Per-thread lockset tracking
///
/// Maps each observed thread to the handle of the lockset it currently holds.
/// The tracker never owns the `LockSetTable`; the detector passes it in per
/// call so one table serves shadow variables and thread locksets alike.
use crate::features::lockset::{LockSetIndex, LockSetTable};
use crate::shared::models::{ProcessThreadId, ProcessTrackedObjectId};
use rustc_hash::FxHashMap;

#[derive(Default)]
pub struct ThreadLockSetTracker {
    thread_lock_sets: FxHashMap<ProcessThreadId, LockSetIndex>,
}

impl ThreadLockSetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_thread(&mut self, thread: ProcessThreadId) {
        self.thread_lock_sets.insert(thread, LockSetIndex::EMPTY);
    }

    pub fn unregister_thread(&mut self, thread: ProcessThreadId) {
        self.thread_lock_sets.remove(&thread);
    }

    /// Current lockset of a thread; unknown threads hold no locks
    pub fn lock_set(&self, thread: ProcessThreadId) -> LockSetIndex {
        self.thread_lock_sets
            .get(&thread)
            .copied()
            .unwrap_or(LockSetIndex::EMPTY)
    }

    /// Acquire is idempotent: re-acquiring a held lock leaves the set unchanged
    pub fn acquire_lock(
        &mut self,
        table: &mut LockSetTable,
        thread: ProcessThreadId,
        lock_id: ProcessTrackedObjectId,
    ) {
        let current = self.lock_set(thread);
        let updated = table.add(current, lock_id);
        self.thread_lock_sets.insert(thread, updated);
    }

    /// Release is tolerant: releasing a lock not held is a no-op
    pub fn release_lock(
        &mut self,
        table: &mut LockSetTable,
        thread: ProcessThreadId,
        lock_id: ProcessTrackedObjectId,
    ) {
        let current = self.lock_set(thread);
        let updated = table.remove(current, lock_id);
        self.thread_lock_sets.insert(thread, updated);
    }
}
