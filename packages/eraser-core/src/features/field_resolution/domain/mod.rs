/// Field resolution domain models
pub mod models;

pub use models::*;
