/// Shadow memory: field identity → current shadow variable
///
/// Entries are created lazily on first access and persist for the analysis
/// session; there is no eviction.
use super::super::domain::ShadowVariable;
use crate::shared::models::FieldId;
use rustc_hash::FxHashMap;

#[derive(Default)]
pub struct ShadowMemory {
    shadows: FxHashMap<FieldId, ShadowVariable>,
}

impl ShadowMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current shadow of a field, creating a `Virgin` one if absent
    pub fn get_or_create_virgin(&mut self, field: FieldId) -> ShadowVariable {
        *self.shadows.entry(field).or_insert(ShadowVariable::Virgin)
    }

    pub fn update(&mut self, field: FieldId, shadow: ShadowVariable) {
        self.shadows.insert(field, shadow);
    }

    pub fn get(&self, field: FieldId) -> Option<ShadowVariable> {
        self.shadows.get(&field).copied()
    }

    /// Number of fields with a shadow variable
    pub fn len(&self) -> usize {
        self.shadows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shadows.is_empty()
    }
}
