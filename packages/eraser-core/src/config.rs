//! Detector configuration
//!
//! Deserializable from YAML so embedders can ship detection settings next to
//! their instrumentation configuration. Defaults reproduce the reference
//! behavior: ineligible fields are skipped and waits transfer the monitor.

use crate::errors::{EraserError, Result};
use crate::features::field_resolution::FieldFlags;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EraserConfig {
    /// Skip fields with immutable/constant storage
    pub exclude_read_only_fields: bool,
    /// Skip fields with per-thread storage
    pub exclude_thread_local_fields: bool,
    /// Model wait-call as lock release and wait-return as lock acquire
    pub model_wait_as_lock_transfer: bool,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self {
            exclude_read_only_fields: true,
            exclude_thread_local_fields: true,
            model_wait_as_lock_transfer: true,
        }
    }
}

impl EraserConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| EraserError::Config(e.to_string()))
    }

    /// Whether a field with these flags is excluded from analysis
    pub fn is_excluded(&self, flags: FieldFlags) -> bool {
        (self.exclude_read_only_fields && flags.read_only)
            || (self.exclude_thread_local_fields && flags.thread_local)
    }
}
