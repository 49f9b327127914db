/// Shadow State Feature
///
/// Per-field shadow variables and per-thread lockset tracking.
///
/// ## Architecture
/// - **Domain**: `ShadowVariable` lattice (`Virgin` → `Exclusive` →
///   `Shared`/`SharedModified`), `ShadowState` tag
/// - **Infrastructure**: `ShadowMemory` (lazy per-field map),
///   `ThreadLockSetTracker` (per-thread held lockset)
pub mod domain;
pub mod infrastructure;

pub use domain::*;
pub use infrastructure::*;
