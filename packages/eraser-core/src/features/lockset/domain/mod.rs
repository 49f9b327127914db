/// Lockset domain models
pub mod models;

pub use models::*;
