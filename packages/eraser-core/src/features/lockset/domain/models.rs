/// Lockset handle model
use serde::{Deserialize, Serialize};

/// Handle to one canonical lockset in the [`LockSetTable`] arena
///
/// Two structurally equal locksets always resolve to the same index, so
/// equality of handles is equality of sets. The empty set is pre-registered
/// at index 0.
///
/// [`LockSetTable`]: crate::features::lockset::LockSetTable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LockSetIndex(u32);

impl LockSetIndex {
    /// Handle of the pre-registered empty lockset
    pub const EMPTY: LockSetIndex = LockSetIndex(0);

    pub(crate) fn new(value: usize) -> Self {
        Self(value as u32)
    }

    pub fn value(&self) -> usize {
        self.0 as usize
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl std::fmt::Display for LockSetIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
