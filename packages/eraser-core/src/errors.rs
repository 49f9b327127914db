//! Error types for eraser-core
//!
//! The detection core itself never fails at runtime: resolution misses are
//! skipped, unknown threads default to the empty lockset, and redundant lock
//! operations are no-ops. Errors exist only at the configuration and
//! metadata edges.

use crate::features::field_resolution::FieldResolutionError;
use thiserror::Error;

/// Main error type for eraser-core operations
#[derive(Debug, Error)]
pub enum EraserError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Field metadata resolution error
    #[error("Field resolution error: {0}")]
    FieldResolution(#[from] FieldResolutionError),
}

/// Result type alias for eraser-core operations
pub type Result<T> = std::result::Result<T, EraserError>;
