//! Score and dead-monster accumulator.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// Round-wide score and kill counter.
///
/// Increments go through atomics so a shared `&ScoreBoard` can be handed to
/// monsters updated on different threads.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    score: AtomicU64,
    dead_monsters: AtomicU32,
}

impl ScoreBoard {
    /// Creates an empty score board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one killed monster worth `points`.
    pub fn record_kill(&self, points: u64) {
        self.score.fetch_add(points, Ordering::Relaxed);
        self.dead_monsters.fetch_add(1, Ordering::Relaxed);
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score.load(Ordering::Relaxed)
    }

    /// Number of monsters killed.
    #[must_use]
    pub fn dead_monsters(&self) -> u32 {
        self.dead_monsters.load(Ordering::Relaxed)
    }
}
