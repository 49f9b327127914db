/// Field resolution infrastructure
pub mod error;
pub mod field_resolver;

pub use error::*;
pub use field_resolver::*;
