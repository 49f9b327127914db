/*
 * Eraser Core - Lockset Race Detection Engine
 *
 * Detection core of a dynamic data race detector for managed programs:
 * the Eraser lockset algorithm over a serialized stream of memory-access
 * and synchronization events.
 *
 * Feature-First Architecture:
 * - shared/      : Identity and access models
 * - features/    : Vertical slices (lockset → shadow_state →
 *                  field_resolution → race_detection)
 *
 * Contract:
 * - Single-writer, globally ordered delivery: the embedder serializes all
 *   events into one chronological sequence before calling in
 * - Amortized O(1) per event via hash-consed locksets and memoized set
 *   operations
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

pub mod config;
pub mod errors;
pub mod features;
pub mod shared;

pub use config::EraserConfig;
pub use errors::{EraserError, Result};
pub use features::field_resolution::{
    FieldDefinition, FieldFlags, FieldResolutionError, FieldResolver, MetadataResolverPort,
    ResolvedField,
};
pub use features::lockset::{LockSetIndex, LockSetTable};
pub use features::race_detection::{
    AccessTracker, ClockPort, EraserDetector, EraserStateMachine, ManualClock, NoThreadNames,
    RaceEvent, RaceSummary, SystemClock, ThreadNameResolverPort, TransitionOutcome,
};
pub use features::shadow_state::{
    ShadowMemory, ShadowState, ShadowVariable, ThreadLockSetTracker,
};
pub use shared::models::{
    AccessKind, AccessRecord, CodeLocation, FieldId, FieldToken, MethodToken, ModuleId, ProcessId,
    ProcessThreadId, ProcessTrackedObjectId, ThreadId, TrackedObjectId,
};
