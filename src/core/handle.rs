//! Match handles: indices into a caller-owned match store.

use serde::{Deserialize, Serialize};

use super::{PuzzleError, Result};

/// Index of a stored match.
///
/// Handles are dense `u32` indices, so a store holds at most `u32::MAX + 1`
/// matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchHandle(pub u32);

impl MatchHandle {
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The handle as a slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for MatchHandle {
    type Error = PuzzleError;

    /// Convert a slot index, failing once indices no longer fit in a `u32`.
    fn try_from(index: usize) -> Result<Self> {
        u32::try_from(index)
            .map(Self)
            .map_err(|_| PuzzleError::StoreFull { index })
    }
}

impl std::fmt::Display for MatchHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Match({})", self.0)
    }
}
