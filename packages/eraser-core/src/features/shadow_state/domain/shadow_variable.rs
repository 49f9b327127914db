/// Shadow variable lattice
///
/// One shadow variable is kept per tracked field declaration. The enum
/// payload carries only what the state needs: the owning thread exists only
/// while `Exclusive`, and `Virgin` has no candidate lockset yet.
use crate::features::lockset::LockSetIndex;
use crate::shared::models::ProcessThreadId;
use serde::{Deserialize, Serialize};

/// Plain state tag, used in race evidence and summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShadowState {
    /// Never accessed
    Virgin,
    /// Accessed by exactly one thread so far
    Exclusive,
    /// Read by multiple threads, never written after the first thread
    Shared,
    /// Accessed by multiple threads with at least one write
    SharedModified,
}

impl std::fmt::Display for ShadowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShadowState::Virgin => write!(f, "Virgin"),
            ShadowState::Exclusive => write!(f, "Exclusive"),
            ShadowState::Shared => write!(f, "Shared"),
            ShadowState::SharedModified => write!(f, "SharedModified"),
        }
    }
}

/// Per-field shadow value: state plus state-specific payload
///
/// The candidate lockset is the running intersection of the locksets observed
/// at each access since the field left `Virgin`. The enum is closed, so a
/// transition can never observe an unknown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShadowVariable {
    Virgin,
    Exclusive {
        owner: ProcessThreadId,
        lock_set: LockSetIndex,
    },
    Shared {
        lock_set: LockSetIndex,
    },
    SharedModified {
        lock_set: LockSetIndex,
    },
}

impl ShadowVariable {
    pub fn state(&self) -> ShadowState {
        match self {
            ShadowVariable::Virgin => ShadowState::Virgin,
            ShadowVariable::Exclusive { .. } => ShadowState::Exclusive,
            ShadowVariable::Shared { .. } => ShadowState::Shared,
            ShadowVariable::SharedModified { .. } => ShadowState::SharedModified,
        }
    }

    /// Candidate lockset; `Virgin` has not observed any access yet and
    /// reports the empty set
    pub fn lock_set(&self) -> LockSetIndex {
        match self {
            ShadowVariable::Virgin => LockSetIndex::EMPTY,
            ShadowVariable::Exclusive { lock_set, .. }
            | ShadowVariable::Shared { lock_set }
            | ShadowVariable::SharedModified { lock_set } => *lock_set,
        }
    }

    /// Owning thread, present only while `Exclusive`
    pub fn owner(&self) -> Option<ProcessThreadId> {
        match self {
            ShadowVariable::Exclusive { owner, .. } => Some(*owner),
            _ => None,
        }
    }
}
