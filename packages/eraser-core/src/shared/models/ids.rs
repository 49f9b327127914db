/// Identity types shared across the detection core
///
/// Every identity is process-scoped: the same raw thread id or object id can
/// recur across monitored processes, so the composite ids pair the raw value
/// with its `ProcessId`.
use serde::{Deserialize, Serialize};

/// Monitored process identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProcessId(pub u32);

impl std::fmt::Display for ProcessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw thread identifier as reported by the instrumentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ThreadId(pub u64);

impl std::fmt::Display for ThreadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Process-scoped thread identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProcessThreadId {
    pub process_id: ProcessId,
    pub thread_id: ThreadId,
}

impl ProcessThreadId {
    pub fn new(process_id: ProcessId, thread_id: ThreadId) -> Self {
        Self {
            process_id,
            thread_id,
        }
    }
}

impl std::fmt::Display for ProcessThreadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.process_id, self.thread_id)
    }
}

/// Raw tracked-object identifier (a synchronization object observed by identity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrackedObjectId(pub u64);

/// Process-scoped lock identity
///
/// Ordered by object id so lockset sequences have a canonical sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessTrackedObjectId {
    pub process_id: ProcessId,
    pub object_id: TrackedObjectId,
}

impl ProcessTrackedObjectId {
    pub fn new(process_id: ProcessId, object_id: TrackedObjectId) -> Self {
        Self {
            process_id,
            object_id,
        }
    }
}

impl PartialOrd for ProcessTrackedObjectId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ProcessTrackedObjectId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.object_id
            .cmp(&other.object_id)
            .then(self.process_id.cmp(&other.process_id))
    }
}

impl std::fmt::Display for ProcessTrackedObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.process_id, self.object_id.0)
    }
}

/// Loaded module identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleId(pub u64);

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// Metadata token of a method definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MethodToken(pub u32);

impl std::fmt::Display for MethodToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// Metadata token of a field definition or reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldToken(pub u32);

impl std::fmt::Display for FieldToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// Identity of one field declaration, process-wide
///
/// Deliberately omits the object instance for instance fields: all instances
/// of a field declaration share a single shadow slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldId {
    pub process_id: ProcessId,
    pub module: ModuleId,
    pub token: FieldToken,
}

impl FieldId {
    pub fn new(process_id: ProcessId, module: ModuleId, token: FieldToken) -> Self {
        Self {
            process_id,
            module,
            token,
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.process_id, self.module, self.token)
    }
}
