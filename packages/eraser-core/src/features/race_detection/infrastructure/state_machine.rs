//! EraserStateMachine - the lockset transition function
//!
//! ## Transition table
//!
//! | Current state      | Condition     | New state             | New lockset      | Race?            |
//! |--------------------|---------------|-----------------------|------------------|------------------|
//! | Virgin             | any           | Exclusive(T)          | L                | no               |
//! | Exclusive(owner)   | owner == T    | Exclusive(owner)      | unchanged        | no               |
//! | Exclusive(owner)   | owner != T    | Shared / SharedMod    | old ∩ L          | iff result empty |
//! | Shared / SharedMod | any           | SharedMod if write    | old ∩ L          | iff result empty |
//!
//! The same-thread `Exclusive` fast path skips the intersection for purely
//! sequential access patterns. Once a second thread touches the field, every
//! access narrows the candidate lockset; an empty candidate means no single
//! lock is held by every accessing thread, which is the Eraser race
//! condition. The
//! emptiness test fires on reads as well as writes while `Shared`, which is
//! more conservative than textbook Eraser; this behavior is deliberate.

use crate::features::lockset::{LockSetIndex, LockSetTable};
use crate::features::shadow_state::{ShadowState, ShadowVariable};
use crate::shared::models::{AccessKind, ProcessThreadId};

/// Result of applying one access to a shadow variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub new_shadow: ShadowVariable,
    pub race_detected: bool,
    pub previous_state: ShadowState,
    pub new_state: ShadowState,
    pub resulting_lock_set: LockSetIndex,
}

/// Pure transition function over the shadow lattice
///
/// The single canonical implementation; orchestration wires field resolution
/// and bookkeeping around it but never duplicates the table.
#[derive(Default)]
pub struct EraserStateMachine;

impl EraserStateMachine {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_transition(
        &self,
        table: &mut LockSetTable,
        thread: ProcessThreadId,
        shadow: ShadowVariable,
        thread_lock_set: LockSetIndex,
        kind: AccessKind,
    ) -> TransitionOutcome {
        match shadow {
            ShadowVariable::Virgin => first_access(thread, thread_lock_set),
            ShadowVariable::Exclusive { owner, .. } if owner == thread => owner_access(shadow),
            ShadowVariable::Exclusive { lock_set, .. } => {
                second_thread_access(table, lock_set, thread_lock_set, kind)
            }
            ShadowVariable::Shared { lock_set } | ShadowVariable::SharedModified { lock_set } => {
                shared_access(table, shadow.state(), lock_set, thread_lock_set, kind)
            }
        }
    }
}

fn first_access(thread: ProcessThreadId, thread_lock_set: LockSetIndex) -> TransitionOutcome {
    TransitionOutcome {
        new_shadow: ShadowVariable::Exclusive {
            owner: thread,
            lock_set: thread_lock_set,
        },
        race_detected: false,
        previous_state: ShadowState::Virgin,
        new_state: ShadowState::Exclusive,
        resulting_lock_set: thread_lock_set,
    }
}

fn owner_access(shadow: ShadowVariable) -> TransitionOutcome {
    TransitionOutcome {
        new_shadow: shadow,
        race_detected: false,
        previous_state: ShadowState::Exclusive,
        new_state: ShadowState::Exclusive,
        resulting_lock_set: shadow.lock_set(),
    }
}

fn second_thread_access(
    table: &mut LockSetTable,
    candidate: LockSetIndex,
    thread_lock_set: LockSetIndex,
    kind: AccessKind,
) -> TransitionOutcome {
    let new_lock_set = table.intersect(candidate, thread_lock_set);
    let new_state = if kind.is_write() {
        ShadowState::SharedModified
    } else {
        ShadowState::Shared
    };

    TransitionOutcome {
        new_shadow: shared_shadow(new_state, new_lock_set),
        race_detected: new_lock_set.is_empty(),
        previous_state: ShadowState::Exclusive,
        new_state,
        resulting_lock_set: new_lock_set,
    }
}

fn shared_access(
    table: &mut LockSetTable,
    previous_state: ShadowState,
    candidate: LockSetIndex,
    thread_lock_set: LockSetIndex,
    kind: AccessKind,
) -> TransitionOutcome {
    let new_lock_set = table.intersect(candidate, thread_lock_set);
    let new_state = if kind.is_write() {
        ShadowState::SharedModified
    } else {
        previous_state
    };

    TransitionOutcome {
        new_shadow: shared_shadow(new_state, new_lock_set),
        race_detected: new_lock_set.is_empty(),
        previous_state,
        new_state,
        resulting_lock_set: new_lock_set,
    }
}

fn shared_shadow(state: ShadowState, lock_set: LockSetIndex) -> ShadowVariable {
    match state {
        ShadowState::SharedModified => ShadowVariable::SharedModified { lock_set },
        _ => ShadowVariable::Shared { lock_set },
    }
}
