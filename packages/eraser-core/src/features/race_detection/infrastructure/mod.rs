/// Race detection infrastructure
pub mod access_tracker;
pub mod state_machine;

pub use access_tracker::*;
pub use state_machine::*;
