/// Race detection application layer
pub mod detector;

pub use detector::*;
