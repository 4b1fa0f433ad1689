//! Roster of the monsters taking part in a round.
//!
//! The roster owns every monster and forwards lifecycle calls to each of
//! them in insertion order. Monsters never coordinate with each other.

use digdug_common::{Millis, MonsterId};
use tracing::{debug, info};

use crate::context::FrameContext;
use crate::level::LevelGrid;
use crate::monster::{Monster, MonsterError, MonsterResult};
use crate::score::ScoreBoard;
use crate::spawn::MonsterSpawn;

/// Owner of all monsters of a round.
#[derive(Debug, Default)]
pub struct MonsterRoster {
    /// Monsters in spawn order
    monsters: Vec<Monster>,
}

impl MonsterRoster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from level spawn data, rejecting the first invalid spawn.
    pub fn from_spawns(spawns: &[MonsterSpawn], level: &LevelGrid) -> MonsterResult<Self> {
        let mut roster = Self::new();
        for spawn in spawns {
            roster.spawn(spawn, level)?;
        }
        info!(count = roster.len(), "Monster roster ready");
        Ok(roster)
    }

    /// Validates `spawn` against `level` and adds a new monster.
    pub fn spawn(&mut self, spawn: &MonsterSpawn, level: &LevelGrid) -> MonsterResult<MonsterId> {
        spawn.validate(level)?;
        let monster = Monster::new(spawn)?;
        let id = monster.id();

        debug!(monster = %id, kind = ?spawn.kind, tile = ?spawn.tile, "Monster spawned");
        self.monsters.push(monster);
        Ok(id)
    }

    /// Returns the number of monsters, dead or alive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    /// Returns whether the roster holds no monsters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Gets a monster.
    #[must_use]
    pub fn get(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|monster| monster.id() == id)
    }

    /// Gets a mutable monster.
    pub fn get_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.iter_mut().find(|monster| monster.id() == id)
    }

    /// Returns an iterator over all monsters in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.iter()
    }

    /// Number of monsters not yet killed.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.monsters.iter().filter(|monster| !monster.is_dead()).count()
    }

    /// Whether every monster has died and left the playfield.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.monsters.iter().all(|monster| !monster.is_visible())
    }

    /// Starts every monster's timers.
    pub fn play(&mut self, now: Millis) {
        for monster in &mut self.monsters {
            monster.play(now);
        }
    }

    /// Returns every living monster to its spawn.
    pub fn reset(&mut self) {
        for monster in &mut self.monsters {
            monster.reset();
        }
    }

    /// Advances every monster by one frame.
    pub fn update(&mut self, ctx: &mut FrameContext<'_>) {
        for monster in &mut self.monsters {
            monster.update(ctx);
        }
    }

    /// Kills a monster, returning the points awarded.
    pub fn kill(
        &mut self,
        id: MonsterId,
        method: u32,
        now: Millis,
        score: &ScoreBoard,
    ) -> MonsterResult<u64> {
        self.get_mut(id)
            .ok_or(MonsterError::NotFound(id))?
            .die(method, now, score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonsterConfig;
    use crate::hazard::MockHazard;
    use crate::level::EARTH_CELL;
    use crate::monster::MonsterState;
    use crate::random::ScriptedRandom;
    use digdug_common::TileCoord;
    use glam::Vec2;

    fn two_spawns() -> Vec<MonsterSpawn> {
        vec![
            MonsterSpawn::pooka(TileCoord::new(2, 3), 1, 8),
            MonsterSpawn::fygar(TileCoord::new(9, 7), 2, 4),
        ]
    }

    #[test]
    fn test_roster_creation() {
        let roster = MonsterRoster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
        assert!(roster.is_cleared());
    }

    #[test]
    fn test_roster_from_spawns() {
        let level = LevelGrid::open(18, 14);
        let roster = MonsterRoster::from_spawns(&two_spawns(), &level).expect("valid spawns");

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.alive_count(), 2);
        let positions: Vec<Vec2> = roster.iter().map(Monster::position).collect();
        assert_eq!(positions, vec![Vec2::new(112.0, 168.0), Vec2::new(504.0, 392.0)]);
    }

    #[test]
    fn test_roster_rejects_spawn_in_earth() {
        let mut level = LevelGrid::open(18, 14);
        level.set(TileCoord::new(9, 7), EARTH_CELL).expect("inside grid");

        let result = MonsterRoster::from_spawns(&two_spawns(), &level);
        assert!(matches!(result, Err(MonsterError::SpawnInEarth(_))));
    }

    #[test]
    fn test_kill_not_found() {
        let mut roster = MonsterRoster::new();
        let score = ScoreBoard::new();

        let result = roster.kill(MonsterId::new(), 1, Millis(0), &score);
        assert!(matches!(result, Err(MonsterError::NotFound(_))));
        assert_eq!(score.dead_monsters(), 0);
    }

    #[test]
    fn test_round_clears_after_death_animation() {
        let level = LevelGrid::open(18, 14);
        let score = ScoreBoard::new();
        let config = MonsterConfig::default();
        let hose = MockHazard::missing();
        let mut rng = ScriptedRandom::new(vec![0]);
        let mut roster = MonsterRoster::from_spawns(&two_spawns(), &level).expect("valid spawns");
        roster.play(Millis(0));

        let ids: Vec<MonsterId> = roster.iter().map(Monster::id).collect();
        for id in &ids {
            roster.kill(*id, 1, Millis(100), &score).expect("alive");
        }
        assert_eq!(roster.alive_count(), 0);
        assert!(!roster.is_cleared());

        let mut ctx = FrameContext {
            now: Millis(1_100),
            match_elapsed: 1_100,
            level: &level,
            opponent: Vec2::ZERO,
            hose: &hose,
            score: &score,
            rng: &mut rng,
            config: &config,
        };
        roster.update(&mut ctx);

        assert!(roster.is_cleared());
        assert_eq!(score.dead_monsters(), 2);
        // 1 * 1 * 4 * 10 + 2 * 1 * 8 * 10
        assert_eq!(score.score(), 200);
    }

    #[test]
    fn test_reset_skips_dead_monsters() {
        let level = LevelGrid::open(18, 14);
        let score = ScoreBoard::new();
        let mut roster = MonsterRoster::from_spawns(&two_spawns(), &level).expect("valid spawns");
        let ids: Vec<MonsterId> = roster.iter().map(Monster::id).collect();

        roster.kill(ids[0], 1, Millis(0), &score).expect("alive");
        roster.reset();

        assert_eq!(roster.get(ids[0]).map(Monster::state), Some(MonsterState::Dead));
        assert_eq!(roster.get(ids[1]).map(Monster::state), Some(MonsterState::Walking));
    }
}
