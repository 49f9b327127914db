/// Access bookkeeping models
use super::ids::{MethodToken, ModuleId, ProcessThreadId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Field access kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessKind {
    /// Read access (field load)
    Read,
    /// Write access (field store)
    Write,
}

impl AccessKind {
    pub fn is_write(&self) -> bool {
        matches!(self, AccessKind::Write)
    }
}

impl std::fmt::Display for AccessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessKind::Read => write!(f, "read"),
            AccessKind::Write => write!(f, "write"),
        }
    }
}

/// Code location of an access: the method the instrumented instruction sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeLocation {
    pub module: ModuleId,
    pub method: MethodToken,
}

impl CodeLocation {
    pub fn new(module: ModuleId, method: MethodToken) -> Self {
        Self { module, method }
    }
}

impl std::fmt::Display for CodeLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}!{}", self.module, self.method)
    }
}

/// Most recent access to a tracked field
///
/// Retained purely for diagnostic context: when a later access races, the
/// previous record becomes the "last access" half of the race evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    pub thread: ProcessThreadId,
    pub thread_name: Option<String>,
    pub location: CodeLocation,
    pub kind: AccessKind,
    pub timestamp: DateTime<Utc>,
}
