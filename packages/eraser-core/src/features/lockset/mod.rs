/// Lockset Feature
///
/// Hash-consed, memoized store of immutable locksets.
///
/// ## Architecture
/// - **Domain**: `LockSetIndex` handle
/// - **Infrastructure**: `LockSetTable` arena with memoized add/remove/intersect
pub mod domain;
pub mod infrastructure;

pub use domain::*;
pub use infrastructure::*;
