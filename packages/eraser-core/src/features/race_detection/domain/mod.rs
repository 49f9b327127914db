/// Race detection domain models
pub mod race_event;

pub use race_event::*;
