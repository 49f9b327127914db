/// Shadow state infrastructure
pub mod shadow_memory;
pub mod thread_lockset_tracker;

pub use shadow_memory::*;
pub use thread_lockset_tracker::*;
