//! EraserDetector - per-process detection session
//!
//! Owns every table of one analysis session and is driven synchronously by
//! the upstream scheduler, one event at a time, in true chronological order.
//! The core has no internal concurrency and no locking of its own; an
//! embedder delivering events from multiple threads must serialize them
//! first.
//!
//! ## Orchestration per field access
//! 1. Resolve the field token; on a miss, skip the access
//! 2. Skip read-only and thread-local fields
//! 3. Fetch or create the shadow variable and the thread's lockset
//! 4. Apply the transition function and persist the new shadow
//! 5. Record the access, retaining the previous record as "last access"
//! 6. Emit a `RaceEvent` iff the transition signaled a race
//!
//! Lock, wait and thread-lifecycle events only update the thread lockset
//! tracker and never emit races.

use crate::config::EraserConfig;
use crate::features::field_resolution::{FieldResolver, MetadataResolverPort};
use crate::features::lockset::LockSetTable;
use crate::features::race_detection::domain::{RaceEvent, RaceSummary};
use crate::features::race_detection::infrastructure::{AccessTracker, EraserStateMachine};
use crate::features::race_detection::ports::{
    ClockPort, NoThreadNames, SystemClock, ThreadNameResolverPort,
};
use crate::features::shadow_state::{ShadowMemory, ThreadLockSetTracker};
use crate::shared::models::{
    AccessKind, AccessRecord, CodeLocation, FieldToken, MethodToken, ModuleId, ProcessThreadId,
    ProcessTrackedObjectId,
};
use tracing::debug;

pub struct EraserDetector<R: MetadataResolverPort> {
    config: EraserConfig,
    lock_sets: LockSetTable,
    shadow_memory: ShadowMemory,
    thread_lock_sets: ThreadLockSetTracker,
    access_tracker: AccessTracker,
    field_resolver: FieldResolver<R>,
    state_machine: EraserStateMachine,
    clock: Box<dyn ClockPort>,
    thread_names: Box<dyn ThreadNameResolverPort>,
    detected_races: Vec<RaceEvent>,
}

impl<R: MetadataResolverPort> EraserDetector<R> {
    pub fn new(metadata_resolver: R) -> Self {
        Self {
            config: EraserConfig::default(),
            lock_sets: LockSetTable::new(),
            shadow_memory: ShadowMemory::new(),
            thread_lock_sets: ThreadLockSetTracker::new(),
            access_tracker: AccessTracker::new(),
            field_resolver: FieldResolver::new(metadata_resolver),
            state_machine: EraserStateMachine::new(),
            clock: Box::new(SystemClock),
            thread_names: Box::new(NoThreadNames),
            detected_races: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: EraserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn ClockPort>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_thread_names(mut self, thread_names: Box<dyn ThreadNameResolverPort>) -> Self {
        self.thread_names = thread_names;
        self
    }

    // ── Thread lifecycle ────────────────────────────────────────────────

    pub fn record_thread_created(&mut self, thread: ProcessThreadId) {
        self.thread_lock_sets.register_thread(thread);
    }

    pub fn record_thread_destroyed(&mut self, thread: ProcessThreadId) {
        self.thread_lock_sets.unregister_thread(thread);
    }

    // ── Lock and wait events ────────────────────────────────────────────

    pub fn record_lock_acquired(
        &mut self,
        thread: ProcessThreadId,
        lock_id: ProcessTrackedObjectId,
    ) {
        self.thread_lock_sets
            .acquire_lock(&mut self.lock_sets, thread, lock_id);
    }

    pub fn record_lock_released(
        &mut self,
        thread: ProcessThreadId,
        lock_id: ProcessTrackedObjectId,
    ) {
        self.thread_lock_sets
            .release_lock(&mut self.lock_sets, thread, lock_id);
    }

    /// The monitor is logically relinquished while the thread blocks in wait
    pub fn record_object_wait_called(
        &mut self,
        thread: ProcessThreadId,
        lock_id: ProcessTrackedObjectId,
    ) {
        if self.config.model_wait_as_lock_transfer {
            self.record_lock_released(thread, lock_id);
        }
    }

    /// The monitor is reacquired when wait returns
    pub fn record_object_wait_returned(
        &mut self,
        thread: ProcessThreadId,
        lock_id: ProcessTrackedObjectId,
    ) {
        if self.config.model_wait_as_lock_transfer {
            self.record_lock_acquired(thread, lock_id);
        }
    }

    // ── Field accesses ──────────────────────────────────────────────────

    pub fn record_read(
        &mut self,
        thread: ProcessThreadId,
        module: ModuleId,
        method_token: MethodToken,
        field_token: FieldToken,
    ) -> Option<RaceEvent> {
        self.record_field_access(thread, module, method_token, field_token, AccessKind::Read)
    }

    pub fn record_write(
        &mut self,
        thread: ProcessThreadId,
        module: ModuleId,
        method_token: MethodToken,
        field_token: FieldToken,
    ) -> Option<RaceEvent> {
        self.record_field_access(thread, module, method_token, field_token, AccessKind::Write)
    }

    // ── Introspection ───────────────────────────────────────────────────

    /// Distinct canonical locksets, including the empty set
    pub fn distinct_lock_set_count(&self) -> usize {
        self.lock_sets.len()
    }

    /// Fields with a shadow variable
    pub fn tracked_field_count(&self) -> usize {
        self.shadow_memory.len()
    }

    /// Every race emitted during this session, in detection order
    pub fn detected_races(&self) -> &[RaceEvent] {
        &self.detected_races
    }

    pub fn race_summary(&self) -> RaceSummary {
        RaceSummary::from_races(&self.detected_races)
    }

    /// The session's lockset table, for diagnostics and report rendering
    pub fn lock_sets(&self) -> &LockSetTable {
        &self.lock_sets
    }

    fn record_field_access(
        &mut self,
        thread: ProcessThreadId,
        module: ModuleId,
        method_token: MethodToken,
        field_token: FieldToken,
        kind: AccessKind,
    ) -> Option<RaceEvent> {
        let resolved = self
            .field_resolver
            .try_resolve(thread.process_id, module, field_token)?;

        if self.config.is_excluded(resolved.flags) {
            return None;
        }

        let field = resolved.definition.field_id(thread.process_id);
        let shadow = self.shadow_memory.get_or_create_virgin(field);
        let thread_lock_set = self.thread_lock_sets.lock_set(thread);

        let outcome = self.state_machine.compute_transition(
            &mut self.lock_sets,
            thread,
            shadow,
            thread_lock_set,
            kind,
        );
        self.shadow_memory.update(field, outcome.new_shadow);

        let last_access = self.access_tracker.last_access(field).cloned();
        let current_access = AccessRecord {
            thread,
            thread_name: self.thread_names.thread_name(thread),
            location: CodeLocation::new(module, method_token),
            kind,
            timestamp: self.clock.now(),
        };
        self.access_tracker.record_access(field, current_access.clone());

        if !outcome.race_detected {
            return None;
        }

        debug!(
            %field,
            field_name = %resolved.definition.full_name(),
            %thread,
            previous_state = %outcome.previous_state,
            new_state = %outcome.new_state,
            "candidate data race: lockset intersection is empty"
        );

        let race = RaceEvent {
            process_id: thread.process_id,
            field,
            field_name: resolved.definition.full_name(),
            current_access,
            last_access,
            previous_state: outcome.previous_state,
            new_state: outcome.new_state,
            candidate_lock_set: outcome.resulting_lock_set,
            timestamp: self.clock.now(),
        };
        self.detected_races.push(race.clone());
        Some(race)
    }
}
