//! FieldResolver - cached field metadata resolution
//!
//! Resolution failures are misses, not errors: the access is skipped with a
//! warning and the detector carries on. Successful resolutions are cached by
//! (module, token), so the metadata layer is consulted once per distinct
//! field reference.

use crate::features::field_resolution::domain::{FieldDefinition, FieldFlags};
use crate::features::field_resolution::ports::MetadataResolverPort;
use crate::shared::models::{FieldToken, ModuleId, ProcessId};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::warn;

/// Outcome of a successful resolution
#[derive(Debug, Clone)]
pub struct ResolvedField {
    pub definition: Arc<FieldDefinition>,
    pub flags: FieldFlags,
}

pub struct FieldResolver<R: MetadataResolverPort> {
    resolver: R,
    cache: FxHashMap<(ModuleId, FieldToken), ResolvedField>,
}

impl<R: MetadataResolverPort> FieldResolver<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            cache: FxHashMap::default(),
        }
    }

    /// Resolve a field reference; `None` means the access must be skipped
    pub fn try_resolve(
        &mut self,
        process_id: ProcessId,
        module: ModuleId,
        token: FieldToken,
    ) -> Option<ResolvedField> {
        if let Some(cached) = self.cache.get(&(module, token)) {
            return Some(cached.clone());
        }

        match self.resolver.resolve_field(process_id, module, token) {
            Ok(definition) => {
                let resolved = ResolvedField {
                    flags: FieldFlags::from_definition(&definition),
                    definition,
                };
                self.cache.insert((module, token), resolved.clone());
                Some(resolved)
            }
            Err(error) => {
                warn!(
                    %module,
                    %token,
                    %error,
                    "skipping analysis of field access: token could not be resolved"
                );
                None
            }
        }
    }

    /// Number of distinct field references resolved so far
    pub fn cached_field_count(&self) -> usize {
        self.cache.len()
    }
}
