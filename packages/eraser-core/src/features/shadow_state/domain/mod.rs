/// Shadow state domain models
pub mod shadow_variable;

pub use shadow_variable::*;
