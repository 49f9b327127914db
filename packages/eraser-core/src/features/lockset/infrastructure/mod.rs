/// Lockset infrastructure
pub mod lockset_table;

pub use lockset_table::*;
