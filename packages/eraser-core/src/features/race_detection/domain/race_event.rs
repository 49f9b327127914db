/// Race evidence domain models
use crate::features::lockset::LockSetIndex;
use crate::features::shadow_state::ShadowState;
use crate::shared::models::{AccessRecord, FieldId, ProcessId};
use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Candidate data race
///
/// Emitted when an access empties a field's candidate lockset: no single lock
/// was held by every thread that touched the field. Carries the two most
/// recent accesses as diagnostic context for downstream reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceEvent {
    pub process_id: ProcessId,
    pub field: FieldId,
    /// Fully qualified field name, for reporting
    pub field_name: String,
    /// The access that emptied the candidate lockset
    pub current_access: AccessRecord,
    /// The access before it, if the field was accessed before
    pub last_access: Option<AccessRecord>,
    pub previous_state: ShadowState,
    pub new_state: ShadowState,
    /// Candidate lockset after the access; empty by construction
    pub candidate_lock_set: LockSetIndex,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate view over the races of one analysis session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RaceSummary {
    pub total_races: usize,
    pub distinct_fields: usize,
    pub write_races: usize,
    pub read_races: usize,
}

impl RaceSummary {
    pub fn from_races(races: &[RaceEvent]) -> Self {
        let mut distinct_fields = FxHashSet::default();
        let mut write_races = 0;
        let mut read_races = 0;

        for race in races {
            distinct_fields.insert(race.field);
            if race.current_access.kind.is_write() {
                write_races += 1;
            } else {
                read_races += 1;
            }
        }

        Self {
            total_races: races.len(),
            distinct_fields: distinct_fields.len(),
            write_races,
            read_races,
        }
    }
}
