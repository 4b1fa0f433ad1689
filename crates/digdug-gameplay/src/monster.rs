//! Monster state machine.
//!
//! A monster is updated once per frame. Each update first resolves at most
//! one state transition, then moves the monster according to the state it
//! ended up in:
//!
//! - `Walking`: random walk through dug tunnels, one whole tile at a time
//! - `Ghost`: drifts through earth toward the player's last aligned position
//! - `Dragon`: Fygar stands still while its fire is out
//! - `Growing`: caught by the hose; four squeezes kill it
//! - `Dead`: shown for a moment, then removed from play
//!
//! All transition guards poll independent stopwatches against the frame
//! timestamp, so several timers may run at once.

use digdug_common::{is_tile_aligned, LevelError, Millis, MonsterId, Rect, Stopwatch, TileCoord, TILE_SIZE};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::context::FrameContext;
use crate::fire::Fire;
use crate::movement::{self, Facing};
use crate::score::ScoreBoard;
use crate::spawn::MonsterSpawn;

/// Error types for monster operations.
#[derive(Debug, Error)]
pub enum MonsterError {
    /// Monster is already dead
    #[error("Monster already dead: {0}")]
    AlreadyDead(MonsterId),
    /// Monster not found
    #[error("Monster not found: {0}")]
    NotFound(MonsterId),
    /// Speed does not divide the tile size
    #[error("Speed {0} does not divide the tile size")]
    InvalidSpeed(u32),
    /// Spawn tile has not been dug
    #[error("Spawn tile {0:?} is not dug")]
    SpawnInEarth(TileCoord),
    /// Level errors
    #[error("Level error: {0}")]
    Level(#[from] LevelError),
}

/// Result type for monster operations.
pub type MonsterResult<T> = Result<T, MonsterError>;

/// Kind of monster, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    /// Regular monster
    Pooka,
    /// Fire breather
    Fygar,
}

impl MonsterKind {
    /// Whether this kind can enter the dragon state.
    #[must_use]
    pub const fn breathes_fire(self) -> bool {
        matches!(self, Self::Fygar)
    }
}

/// Behaviour state of a monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MonsterState {
    /// Random walk through tunnels
    #[default]
    Walking,
    /// Passing through earth toward the player
    Ghost,
    /// Breathing fire
    Dragon,
    /// Caught by the hose
    Growing,
    /// Killed
    Dead,
}

/// Cell of the 56×56 sprite sheet to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteFrame {
    /// Column in the sheet
    pub column: u8,
    /// Row in the sheet
    pub row: u8,
}

impl SpriteFrame {
    /// Frame shown at spawn.
    pub const SPAWN: Self = Self { column: 1, row: 0 };

    /// Ghost frame.
    pub const GHOST: Self = Self { column: 0, row: 0 };

    /// Source rectangle in the sprite sheet.
    #[must_use]
    pub fn source_rect(self) -> Rect {
        Rect::new(
            f32::from(self.column) * TILE_SIZE,
            f32::from(self.row) * TILE_SIZE,
            TILE_SIZE,
            TILE_SIZE,
        )
    }
}

/// Independent stopwatches gating transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct MonsterTimers {
    /// Walk animation frame timer
    walk_anim: Stopwatch,
    /// Time walking since the last breath, then breath duration
    fire_cycle: Stopwatch,
    /// Time walking since the last ghost phase
    ghost_cooldown: Stopwatch,
    /// Time spent as a ghost
    ghost_duration: Stopwatch,
    /// Squeeze tick timer
    squeeze: Stopwatch,
    /// Time since death
    death: Stopwatch,
}

/// A single monster.
#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    id: MonsterId,
    kind: MonsterKind,
    state: MonsterState,
    /// State to return to after a squeeze wears off
    previous_state: MonsterState,
    position: Vec2,
    spawn_position: Vec2,
    spawn_row: u32,
    facing: Facing,
    /// Pixels per frame while walking
    speed: f32,
    /// Velocity committed on the last tile boundary
    speed_vector: Vec2,
    squeeze_count: u8,
    multiplier: u32,
    frame: SpriteFrame,
    visible: bool,
    fire: Fire,
    /// Player position seen on the last frame the player stood on a tile
    last_known_opponent: Option<Vec2>,
    timers: MonsterTimers,
}

impl Monster {
    /// Creates a monster at its spawn tile. Timers stay stopped until [`Monster::play`].
    ///
    /// Only the speed and the tile's sign are checked here; whether the tile
    /// is a dug tile of the level is checked by [`MonsterSpawn::validate`].
    pub fn new(spawn: &MonsterSpawn) -> MonsterResult<Self> {
        spawn.validate_speed()?;
        let TileCoord { x, y } = spawn.tile;
        if x < 0 {
            return Err(LevelError::OutOfBounds { x, y }.into());
        }
        let spawn_row = u32::try_from(y).map_err(|_| LevelError::OutOfBounds { x, y })?;
        let position = spawn.tile.to_pixel();

        Ok(Self {
            id: MonsterId::new(),
            kind: spawn.kind,
            state: MonsterState::Walking,
            previous_state: MonsterState::Walking,
            position,
            spawn_position: position,
            spawn_row,
            facing: Facing::Left,
            speed: spawn.speed as f32,
            speed_vector: Vec2::ZERO,
            squeeze_count: 0,
            multiplier: spawn.multiplier,
            frame: SpriteFrame::SPAWN,
            visible: true,
            fire: Fire::new(),
            last_known_opponent: None,
            timers: MonsterTimers::default(),
        })
    }

    /// Returns the monster's ID.
    #[must_use]
    pub const fn id(&self) -> MonsterId {
        self.id
    }

    /// Returns the monster kind.
    #[must_use]
    pub const fn kind(&self) -> MonsterKind {
        self.kind
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> MonsterState {
        self.state
    }

    /// Returns the state recorded when the last squeeze began.
    #[must_use]
    pub const fn previous_state(&self) -> MonsterState {
        self.previous_state
    }

    /// Returns whether the monster has been killed.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.state == MonsterState::Dead
    }

    /// Top-left pixel position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Spawn pixel position.
    #[must_use]
    pub const fn spawn_position(&self) -> Vec2 {
        self.spawn_position
    }

    /// Current facing.
    #[must_use]
    pub const fn facing(&self) -> Facing {
        self.facing
    }

    /// Velocity committed on the last tile boundary.
    #[must_use]
    pub const fn speed_vector(&self) -> Vec2 {
        self.speed_vector
    }

    /// Current squeeze level.
    #[must_use]
    pub const fn squeeze_count(&self) -> u8 {
        self.squeeze_count
    }

    /// Sprite frame to draw.
    #[must_use]
    pub const fn frame(&self) -> SpriteFrame {
        self.frame
    }

    /// Source rectangle of the sprite frame.
    #[must_use]
    pub fn source_rect(&self) -> Rect {
        self.frame.source_rect()
    }

    /// Whether the monster is still in play.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// The monster's fire hazard.
    #[must_use]
    pub const fn fire(&self) -> &Fire {
        &self.fire
    }

    /// Bounding rectangle used for hose collisions.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::tile_at(self.position)
    }

    /// Player position the monster homes in on as a ghost.
    #[must_use]
    pub const fn last_known_opponent(&self) -> Option<Vec2> {
        self.last_known_opponent
    }

    /// Points awarded for killing this monster with `method`.
    #[must_use]
    pub fn death_points(&self, method: u32) -> u64 {
        u64::from(self.multiplier) * u64::from(method) * (u64::from(self.spawn_row) + 1) * 10
    }

    /// Starts the walking, fire and ghost timers that are not already running.
    pub fn play(&mut self, now: Millis) {
        self.timers.fire_cycle.start(now);
        self.timers.ghost_cooldown.start(now);
        self.timers.walk_anim.start(now);
    }

    /// Returns a living monster to its spawn configuration. Dead monsters stay dead.
    pub fn reset(&mut self) {
        if self.is_dead() {
            return;
        }

        self.position = self.spawn_position;
        self.state = MonsterState::Walking;
        self.previous_state = MonsterState::Walking;
        self.frame = SpriteFrame::SPAWN;
        self.facing = Facing::Left;
        self.fire = Fire::new();
        self.speed_vector = Vec2::ZERO;
        self.squeeze_count = 0;
        self.timers = MonsterTimers::default();

        debug!(monster = %self.id, "Monster reset to spawn");
    }

    /// Kills the monster and awards `multiplier * method * (spawn_row + 1) * 10` points.
    ///
    /// Returns the points awarded.
    pub fn die(&mut self, method: u32, now: Millis, score: &ScoreBoard) -> MonsterResult<u64> {
        if self.is_dead() {
            return Err(MonsterError::AlreadyDead(self.id));
        }
        Ok(self.enter_dead(method, now, score))
    }

    /// Advances the monster by one frame.
    pub fn update(&mut self, ctx: &mut FrameContext<'_>) {
        if !self.visible {
            return;
        }

        self.resolve_transition(ctx);
        self.update_movement(ctx);
    }

    fn resolve_transition(&mut self, ctx: &mut FrameContext<'_>) {
        let now = ctx.now;
        let config = ctx.config;

        match self.state {
            MonsterState::Dead => {
                if self.timers.death.elapsed(now) >= config.death_duration_ms {
                    self.visible = false;
                    self.timers.death.stop(now);
                    debug!(monster = %self.id, "Dead monster removed from play");
                }
            },
            MonsterState::Walking => self.resolve_walking(ctx),
            MonsterState::Ghost => {
                let can_land = is_tile_aligned(self.position)
                    && ctx.level.is_open(TileCoord::from_pixel(self.position));
                if can_land && self.timers.ghost_duration.elapsed(now) >= config.ghost_min_duration_ms {
                    self.timers.ghost_duration.reset();
                    self.frame.column = SpriteFrame::SPAWN.column;
                    self.timers.walk_anim.start(now);
                    self.timers.ghost_cooldown.start(now);
                    self.transition(MonsterState::Walking);
                }
            },
            MonsterState::Dragon => {
                if self.timers.fire_cycle.elapsed(now) >= config.dragon_duration_ms {
                    self.fire.hide();
                    self.timers.fire_cycle.restart(now);
                    self.timers.walk_anim.start(now);
                    self.transition(MonsterState::Walking);
                }
            },
            MonsterState::Growing => {
                if self.timers.squeeze.elapsed(now) >= config.squeeze_tick_ms {
                    self.resolve_squeeze(ctx);
                }
            },
        }
    }

    /// Walking guards in priority order: fire, ghost, hose.
    fn resolve_walking(&mut self, ctx: &mut FrameContext<'_>) {
        let now = ctx.now;
        let config = ctx.config;

        if self.kind.breathes_fire() {
            let threshold = ctx.roll(config.fire_cycle_min_ms, config.fire_cycle_max_ms);
            if self.timers.fire_cycle.elapsed(now) >= threshold {
                self.fire.show(self.position + self.facing.tile_ahead());
                self.timers.walk_anim.reset();
                self.timers.fire_cycle.restart(now);
                self.transition(MonsterState::Dragon);
                return;
            }
        }

        if ctx.match_elapsed >= config.ghost_warmup_ms {
            let threshold = ctx.roll(config.ghost_cooldown_min_ms, config.ghost_cooldown_max_ms);
            if self.timers.ghost_cooldown.elapsed(now) >= threshold {
                self.timers.walk_anim.reset();
                self.frame = SpriteFrame::GHOST;
                self.timers.ghost_cooldown.reset();
                self.timers.ghost_duration.start(now);
                self.transition(MonsterState::Ghost);
                return;
            }
        }

        if ctx.hose.overlaps(&self.bounds()) {
            self.timers.walk_anim.reset();
            self.previous_state = self.state;
            self.frame.row = 0;
            self.timers.squeeze.start(now);
            self.transition(MonsterState::Growing);
        }
    }

    fn resolve_squeeze(&mut self, ctx: &mut FrameContext<'_>) {
        let now = ctx.now;

        if ctx.hose.overlaps(&self.bounds()) {
            self.squeeze_count = self.squeeze_count.saturating_add(1);
        } else if self.squeeze_count > 0 {
            self.squeeze_count -= 1;
        }

        let count = self.squeeze_count;
        if count == 0 {
            let previous = self.previous_state;
            self.timers.squeeze.reset();
            if previous == MonsterState::Walking {
                self.timers.walk_anim.start(now);
            }
            self.transition(previous);
        } else if count >= ctx.config.squeeze_death_count {
            self.enter_dead(1, now, ctx.score);
        } else {
            self.timers.squeeze.restart(now);
        }

        self.frame.column = if self.state == MonsterState::Ghost {
            SpriteFrame::GHOST.column
        } else {
            count.saturating_add(1)
        };
    }

    fn enter_dead(&mut self, method: u32, now: Millis, score: &ScoreBoard) -> u64 {
        let points = self.death_points(method);

        self.fire.hide();
        self.squeeze_count = 0;
        self.timers.squeeze.reset();
        self.timers.death.start(now);
        score.record_kill(points);
        self.transition(MonsterState::Dead);

        info!(monster = %self.id, method, points, "Monster killed");
        points
    }

    fn transition(&mut self, next: MonsterState) {
        debug!(monster = %self.id, from = ?self.state, to = ?next, "Monster state change");
        self.state = next;
    }

    fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
        self.fire.set_facing(facing);
    }

    fn update_movement(&mut self, ctx: &mut FrameContext<'_>) {
        if self.state != MonsterState::Ghost && ctx.opponent_aligned() {
            self.last_known_opponent = Some(ctx.opponent);
        }

        match self.state {
            MonsterState::Ghost => {
                // Never seen aligned: aim for the tile the opponent stands on.
                let target = *self
                    .last_known_opponent
                    .get_or_insert_with(|| TileCoord::from_pixel(ctx.opponent).to_pixel());
                let (next, facing) = movement::home_toward(self.position, target, self.speed / 2.0);
                self.position = next;
                if let Some(facing) = facing {
                    self.set_facing(facing);
                }
            },
            MonsterState::Walking => {
                self.walk(ctx);
                self.animate_walk(ctx);
            },
            MonsterState::Dragon | MonsterState::Growing | MonsterState::Dead => {},
        }
    }

    fn walk(&mut self, ctx: &mut FrameContext<'_>) {
        // Finish the current tile before choosing again.
        if !is_tile_aligned(self.position) {
            self.position += self.speed_vector;
            return;
        }

        match movement::choose_direction(ctx.level, self.position, &mut *ctx.rng) {
            Some(direction) => {
                self.speed_vector = direction.velocity(self.speed);
                self.position += self.speed_vector;
                if let Some(facing) = direction.facing() {
                    self.set_facing(facing);
                }
            },
            None => {
                self.speed_vector = Vec2::ZERO;
                warn!(
                    monster = %self.id,
                    x = self.position.x,
                    y = self.position.y,
                    "No walkable neighbour, holding position"
                );
            },
        }
    }

    fn animate_walk(&mut self, ctx: &FrameContext<'_>) {
        let elapsed = self.timers.walk_anim.elapsed(ctx.now);
        if elapsed >= ctx.config.walk_frame_ms {
            self.frame.row = 1;
            self.timers.walk_anim.restart(ctx.now);
        } else if elapsed >= ctx.config.walk_rest_ms {
            self.frame.row = 0;
        }
    }
}
