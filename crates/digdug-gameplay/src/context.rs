//! Per-frame inputs handed to every monster update.

use digdug_common::{is_tile_aligned, Millis};
use glam::Vec2;

use crate::config::MonsterConfig;
use crate::hazard::HazardQuery;
use crate::level::LevelGrid;
use crate::random::RandomSource;
use crate::score::ScoreBoard;

/// Everything a monster reads or increments during one frame.
///
/// The game loop builds one context per frame and passes it to every
/// monster; nothing here is owned by a monster.
pub struct FrameContext<'a> {
    /// Current timestamp used to poll stopwatches
    pub now: Millis,
    /// Milliseconds since the round started
    pub match_elapsed: u64,
    /// Level snapshot for this frame
    pub level: &'a LevelGrid,
    /// Player position for this frame
    pub opponent: Vec2,
    /// The player's hose
    pub hose: &'a dyn HazardQuery,
    /// Score and kill accumulator
    pub score: &'a ScoreBoard,
    /// Random source shared by all monsters
    pub rng: &'a mut dyn RandomSource,
    /// Timing configuration
    pub config: &'a MonsterConfig,
}

impl FrameContext<'_> {
    /// Whether the player currently stands exactly on a tile.
    #[must_use]
    pub fn opponent_aligned(&self) -> bool {
        is_tile_aligned(self.opponent)
    }

    /// Draws a random threshold in `[min, max)`.
    pub fn roll(&mut self, min: u64, max: u64) -> u64 {
        self.rng.next(min, max)
    }
}

impl std::fmt::Debug for FrameContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameContext")
            .field("now", &self.now)
            .field("match_elapsed", &self.match_elapsed)
            .field("opponent", &self.opponent)
            .finish_non_exhaustive()
    }
}
