/// Metadata resolver port trait
use crate::features::field_resolution::domain::FieldDefinition;
use crate::features::field_resolution::infrastructure::error::Result;
use crate::shared::models::{FieldToken, ModuleId, ProcessId};
use std::sync::Arc;

/// Port trait for the external metadata layer
///
/// Resolves a raw field token observed in an access event into the field
/// definition it refers to. Implemented by the embedding runtime; tests use
/// an in-memory fake.
pub trait MetadataResolverPort {
    fn resolve_field(
        &self,
        process_id: ProcessId,
        module: ModuleId,
        token: FieldToken,
    ) -> Result<Arc<FieldDefinition>>;
}
