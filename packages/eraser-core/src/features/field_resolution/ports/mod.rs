/// Field resolution ports
pub mod metadata_resolver_port;

pub use metadata_resolver_port::*;
