/// Field Resolution Feature
///
/// Resolves raw field tokens into field definitions plus eligibility flags.
/// Read-only and thread-local fields structurally cannot race and are
/// excluded from analysis.
///
/// ## Architecture
/// - **Domain**: `FieldDefinition`, `FieldFlags`
/// - **Ports**: `MetadataResolverPort` (implemented by the embedding runtime)
/// - **Infrastructure**: caching `FieldResolver`, `FieldResolutionError`
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::*;
pub use infrastructure::*;
pub use ports::*;
