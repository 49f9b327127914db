// Eraser detection scenarios
//
// End-to-end runs of the detector over hand-written event sequences, driven
// the way the upstream scheduler would: one serialized event at a time.

use chrono::{TimeZone, Utc};
use eraser_core::{
    AccessKind, EraserConfig, EraserDetector, FieldDefinition, FieldResolutionError, FieldToken,
    ManualClock, MetadataResolverPort, ModuleId, MethodToken, ProcessId, ProcessThreadId,
    ProcessTrackedObjectId, ShadowState, ThreadId, ThreadNameResolverPort, TrackedObjectId,
};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================
// Test Helpers
// ============================================================

const MODULE: ModuleId = ModuleId(0x1000);
const METHOD_A: MethodToken = MethodToken(0x0600_0001);
const METHOD_B: MethodToken = MethodToken(0x0600_0002);

struct FakeMetadataResolver {
    fields: HashMap<(ModuleId, FieldToken), Arc<FieldDefinition>>,
}

impl FakeMetadataResolver {
    fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    fn with_field(self, token: u32, name: &str) -> Self {
        self.with_field_def(token, name, false, false, false)
    }

    fn with_read_only_field(self, token: u32, name: &str) -> Self {
        self.with_field_def(token, name, true, false, false)
    }

    fn with_thread_local_field(self, token: u32, name: &str) -> Self {
        self.with_field_def(token, name, false, false, true)
    }

    fn with_field_def(
        mut self,
        token: u32,
        name: &str,
        init_only: bool,
        literal: bool,
        thread_static: bool,
    ) -> Self {
        self.fields.insert(
            (MODULE, FieldToken(token)),
            Arc::new(FieldDefinition {
                module: MODULE,
                token: FieldToken(token),
                name: name.to_string(),
                declaring_type: "App.State".to_string(),
                is_init_only: init_only,
                is_literal: literal,
                is_thread_static: thread_static,
            }),
        );
        self
    }
}

impl MetadataResolverPort for FakeMetadataResolver {
    fn resolve_field(
        &self,
        _process_id: ProcessId,
        module: ModuleId,
        token: FieldToken,
    ) -> Result<Arc<FieldDefinition>, FieldResolutionError> {
        self.fields
            .get(&(module, token))
            .cloned()
            .ok_or(FieldResolutionError::UnknownField { module, token })
    }
}

struct StaticThreadNames;

impl ThreadNameResolverPort for StaticThreadNames {
    fn thread_name(&self, thread: ProcessThreadId) -> Option<String> {
        Some(format!("worker-{}", thread.thread_id))
    }
}

fn thread(id: u64) -> ProcessThreadId {
    ProcessThreadId::new(ProcessId(1), ThreadId(id))
}

fn lock(id: u64) -> ProcessTrackedObjectId {
    ProcessTrackedObjectId::new(ProcessId(1), TrackedObjectId(id))
}

fn detector_with(resolver: FakeMetadataResolver) -> EraserDetector<FakeMetadataResolver> {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap());
    EraserDetector::new(resolver).with_clock(Box::new(clock))
}

// ============================================================
// Scenario 1: unsynchronized writes from two threads race
// ============================================================

#[test]
fn test_two_unlocked_writers_race() {
    let mut detector = detector_with(FakeMetadataResolver::new().with_field(1, "counter"));
    detector.record_thread_created(thread(1));
    detector.record_thread_created(thread(2));

    // First write: field leaves Virgin, no race possible
    let first = detector.record_write(thread(1), MODULE, METHOD_A, FieldToken(1));
    assert_eq!(first, None);

    // Second thread writes holding no locks: candidate lockset empties
    let race = detector
        .record_write(thread(2), MODULE, METHOD_B, FieldToken(1))
        .expect("unsynchronized write from a second thread must race");

    assert_eq!(race.previous_state, ShadowState::Exclusive);
    assert_eq!(race.new_state, ShadowState::SharedModified);
    assert!(race.candidate_lock_set.is_empty());
    assert_eq!(race.current_access.thread, thread(2));
    assert_eq!(race.current_access.kind, AccessKind::Write);

    let last = race.last_access.expect("first write must be retained");
    assert_eq!(last.thread, thread(1));
    assert_eq!(last.location.method, METHOD_A);

    assert_eq!(detector.detected_races().len(), 1);
}

// ============================================================
// Scenario 2: a common lock prevents the race
// ============================================================

#[test]
fn test_common_lock_prevents_race() {
    let mut detector = detector_with(FakeMetadataResolver::new().with_field(1, "counter"));

    for t in [thread(1), thread(2)] {
        detector.record_lock_acquired(t, lock(10));
        let result = detector.record_write(t, MODULE, METHOD_A, FieldToken(1));
        assert_eq!(result, None);
        detector.record_lock_released(t, lock(10));
    }

    assert!(detector.detected_races().is_empty());
}

// ============================================================
// Scenario 3: disjoint locks still race
// ============================================================

#[test]
fn test_disjoint_locks_race() {
    let mut detector = detector_with(FakeMetadataResolver::new().with_field(1, "counter"));

    detector.record_lock_acquired(thread(1), lock(10));
    assert_eq!(
        detector.record_write(thread(1), MODULE, METHOD_A, FieldToken(1)),
        None
    );
    detector.record_lock_released(thread(1), lock(10));

    detector.record_lock_acquired(thread(2), lock(20));
    let race = detector
        .record_write(thread(2), MODULE, METHOD_B, FieldToken(1))
        .expect("disjoint locksets intersect to empty");
    detector.record_lock_released(thread(2), lock(20));

    assert_eq!(race.previous_state, ShadowState::Exclusive);
    assert_eq!(race.new_state, ShadowState::SharedModified);
    assert!(race.candidate_lock_set.is_empty());
}

// ============================================================
// Eligibility and resolution edge cases
// ============================================================

#[test]
fn test_read_only_and_thread_local_fields_never_race() {
    let mut detector = detector_with(
        FakeMetadataResolver::new()
            .with_read_only_field(1, "config")
            .with_thread_local_field(2, "scratch"),
    );

    for token in [FieldToken(1), FieldToken(2)] {
        assert_eq!(
            detector.record_write(thread(1), MODULE, METHOD_A, token),
            None
        );
        assert_eq!(
            detector.record_write(thread(2), MODULE, METHOD_B, token),
            None
        );
    }

    // Excluded fields never got a shadow variable
    assert_eq!(detector.tracked_field_count(), 0);
    assert!(detector.detected_races().is_empty());
}

#[test]
fn test_unresolvable_field_token_is_skipped() {
    let mut detector = detector_with(FakeMetadataResolver::new());

    assert_eq!(
        detector.record_write(thread(1), MODULE, METHOD_A, FieldToken(99)),
        None
    );
    assert_eq!(
        detector.record_write(thread(2), MODULE, METHOD_B, FieldToken(99)),
        None
    );
    assert_eq!(detector.tracked_field_count(), 0);
}

#[test]
fn test_exclusion_toggles_can_re_enable_analysis() {
    let config = EraserConfig::from_yaml_str(
        "exclude_read_only_fields: false\nexclude_thread_local_fields: false\n",
    )
    .unwrap();
    let mut detector =
        detector_with(FakeMetadataResolver::new().with_read_only_field(1, "config"))
            .with_config(config);

    detector.record_write(thread(1), MODULE, METHOD_A, FieldToken(1));
    let race = detector.record_write(thread(2), MODULE, METHOD_B, FieldToken(1));
    assert!(race.is_some());
}

// ============================================================
// Wait modeling
// ============================================================

#[test]
fn test_wait_relinquishes_and_reacquires_the_monitor() {
    let mut detector = detector_with(FakeMetadataResolver::new().with_field(1, "state"));

    // Thread 1 accesses under L, then waits on L (logically releasing it)
    detector.record_lock_acquired(thread(1), lock(10));
    detector.record_write(thread(1), MODULE, METHOD_A, FieldToken(1));
    detector.record_object_wait_called(thread(1), lock(10));

    // Thread 2 takes the same monitor and writes: still protected by L
    detector.record_lock_acquired(thread(2), lock(10));
    assert_eq!(
        detector.record_write(thread(2), MODULE, METHOD_B, FieldToken(1)),
        None
    );
    detector.record_lock_released(thread(2), lock(10));

    // Thread 1 returns from wait holding the monitor again
    detector.record_object_wait_returned(thread(1), lock(10));
    assert_eq!(
        detector.record_write(thread(1), MODULE, METHOD_A, FieldToken(1)),
        None
    );

    assert!(detector.detected_races().is_empty());
}

// ============================================================
// Session accounting and evidence
// ============================================================

#[test]
fn test_introspection_counts() {
    let mut detector = detector_with(
        FakeMetadataResolver::new()
            .with_field(1, "a")
            .with_field(2, "b"),
    );

    // Empty lockset is pre-registered
    assert_eq!(detector.distinct_lock_set_count(), 1);
    assert_eq!(detector.tracked_field_count(), 0);

    detector.record_lock_acquired(thread(1), lock(10));
    assert_eq!(detector.distinct_lock_set_count(), 2);

    detector.record_write(thread(1), MODULE, METHOD_A, FieldToken(1));
    detector.record_read(thread(1), MODULE, METHOD_A, FieldToken(2));
    assert_eq!(detector.tracked_field_count(), 2);
}

#[test]
fn test_race_event_carries_thread_names_and_serializes() {
    let mut detector = detector_with(FakeMetadataResolver::new().with_field(1, "counter"))
        .with_thread_names(Box::new(StaticThreadNames));

    detector.record_write(thread(1), MODULE, METHOD_A, FieldToken(1));
    let race = detector
        .record_write(thread(2), MODULE, METHOD_B, FieldToken(1))
        .unwrap();

    assert_eq!(race.current_access.thread_name.as_deref(), Some("worker-2"));
    assert_eq!(
        race.last_access.as_ref().unwrap().thread_name.as_deref(),
        Some("worker-1")
    );
    assert_eq!(race.field_name, "App.State::counter");

    // Downstream reporting consumes race evidence as data; it must serialize
    let json = serde_json::to_string(&race).unwrap();
    assert!(json.contains("SharedModified"));
}

#[test]
fn test_race_summary_aggregates_session() {
    let mut detector = detector_with(
        FakeMetadataResolver::new()
            .with_field(1, "a")
            .with_field(2, "b"),
    );

    detector.record_write(thread(1), MODULE, METHOD_A, FieldToken(1));
    detector.record_write(thread(2), MODULE, METHOD_B, FieldToken(1));
    detector.record_write(thread(1), MODULE, METHOD_A, FieldToken(2));
    detector.record_read(thread(2), MODULE, METHOD_B, FieldToken(2));

    let summary = detector.race_summary();
    assert_eq!(summary.total_races, 2);
    assert_eq!(summary.distinct_fields, 2);
    assert_eq!(summary.write_races, 1);
    assert_eq!(summary.read_races, 1);
}

#[test]
fn test_sequential_single_thread_never_races() {
    let mut detector = detector_with(FakeMetadataResolver::new().with_field(1, "counter"));

    for _ in 0..100 {
        assert_eq!(
            detector.record_write(thread(1), MODULE, METHOD_A, FieldToken(1)),
            None
        );
        assert_eq!(
            detector.record_read(thread(1), MODULE, METHOD_A, FieldToken(1)),
            None
        );
    }

    assert!(detector.detected_races().is_empty());
}
