/// Field metadata domain models
use crate::shared::models::{FieldId, FieldToken, ModuleId, ProcessId};
use serde::{Deserialize, Serialize};

/// Resolved field declaration metadata
///
/// `module` and `token` identify the *definition*: a field reference token in
/// another module resolves to the same definition and therefore the same
/// shadow slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub module: ModuleId,
    pub token: FieldToken,
    pub name: String,
    pub declaring_type: String,
    /// Assignable only in a constructor (readonly)
    pub is_init_only: bool,
    /// Compile-time constant storage
    pub is_literal: bool,
    /// Storage private per thread
    pub is_thread_static: bool,
}

impl FieldDefinition {
    /// Process-wide identity of this declaration
    pub fn field_id(&self, process_id: ProcessId) -> FieldId {
        FieldId::new(process_id, self.module, self.token)
    }

    /// Fully qualified display name
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.declaring_type, self.name)
    }
}

/// Analysis eligibility flags derived from field metadata
///
/// Fields carrying either flag structurally cannot race and are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldFlags {
    /// Immutable or constant storage (init-only or literal)
    pub read_only: bool,
    /// Thread-local storage
    pub thread_local: bool,
}

impl FieldFlags {
    pub fn from_definition(definition: &FieldDefinition) -> Self {
        Self {
            read_only: definition.is_init_only || definition.is_literal,
            thread_local: definition.is_thread_static,
        }
    }
}
