/// Last-access bookkeeping
///
/// Keeps the most recent access per field so a race can report both halves of
/// the conflicting pair. Only the latest record is retained.
use crate::shared::models::{AccessRecord, FieldId};
use rustc_hash::FxHashMap;

#[derive(Default)]
pub struct AccessTracker {
    last_access_by_field: FxHashMap<FieldId, AccessRecord>,
}

impl AccessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_access(&self, field: FieldId) -> Option<&AccessRecord> {
        self.last_access_by_field.get(&field)
    }

    pub fn record_access(&mut self, field: FieldId, access: AccessRecord) {
        self.last_access_by_field.insert(field, access);
    }
}
