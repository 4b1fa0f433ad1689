//! ID types for monsters.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for monster IDs.
static MONSTER_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a monster, used to tell monsters apart in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonsterId(u64);

impl MonsterId {
    /// Creates a new unique monster ID.
    #[must_use]
    pub fn new() -> Self {
        Self(MONSTER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Creates a monster ID from a raw value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl Default for MonsterId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "monster#{}", self.0)
    }
}
