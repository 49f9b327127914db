/// Field resolution errors
use crate::shared::models::{FieldToken, ModuleId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldResolutionError {
    #[error("Unknown module: {0}")]
    UnknownModule(ModuleId),

    #[error("Unknown field token {token} in module {module}")]
    UnknownField { module: ModuleId, token: FieldToken },

    #[error("Metadata unavailable: {0}")]
    MetadataUnavailable(String),
}

pub type Result<T> = std::result::Result<T, FieldResolutionError>;
