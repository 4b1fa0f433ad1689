//! Tile-constrained movement helpers.
//!
//! Walking monsters commit to one direction per tile. The choice is made only
//! on tile boundaries, from the neighbours that are inside the playfield and
//! already dug. Ghosts ignore the grid and home in on a target axis by axis.

use digdug_common::{TileCoord, TILE_SIZE};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::level::LevelGrid;
use crate::random::RandomSource;

/// Horizontal facing of a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Facing {
    /// Facing left (spawn facing)
    #[default]
    Left,
    /// Facing right (sprite mirrored)
    Right,
}

impl Facing {
    /// Pixel offset of the tile directly in front.
    #[must_use]
    pub fn tile_ahead(self) -> Vec2 {
        match self {
            Self::Left => Vec2::new(-TILE_SIZE, 0.0),
            Self::Right => Vec2::new(TILE_SIZE, 0.0),
        }
    }
}

/// One of the four grid directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards smaller X
    Left,
    /// Towards larger X
    Right,
    /// Towards smaller Y
    Up,
    /// Towards larger Y
    Down,
}

impl Direction {
    /// All directions in draw order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Per-frame velocity for this direction at `speed` pixels per frame.
    #[must_use]
    pub fn velocity(self, speed: f32) -> Vec2 {
        match self {
            Self::Left => Vec2::new(-speed, 0.0),
            Self::Right => Vec2::new(speed, 0.0),
            Self::Up => Vec2::new(0.0, -speed),
            Self::Down => Vec2::new(0.0, speed),
        }
    }

    /// Facing implied by a horizontal move.
    #[must_use]
    pub const fn facing(self) -> Option<Facing> {
        match self {
            Self::Left => Some(Facing::Left),
            Self::Right => Some(Facing::Right),
            Self::Up | Self::Down => None,
        }
    }

    const fn tile_delta(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }
}

/// Checks whether a monster on the tile-aligned `position` may step in `direction`.
///
/// The step must stay inside the playfield and land on a dug tile.
#[must_use]
pub fn can_step(level: &LevelGrid, position: Vec2, direction: Direction) -> bool {
    let inside = match direction {
        Direction::Left => position.x > 0.0,
        Direction::Right => position.x < level.max_pixel_x(),
        Direction::Up => position.y > 0.0,
        Direction::Down => position.y < level.max_pixel_y(),
    };
    if !inside {
        return false;
    }

    let (dx, dy) = direction.tile_delta();
    level.is_open(TileCoord::from_pixel(position).offset(dx, dy))
}

/// Picks a random walkable direction from a tile-aligned `position`.
///
/// Every valid direction is equally likely and exactly one draw is made.
/// Returns `None` without drawing when the monster is boxed in.
pub fn choose_direction(
    level: &LevelGrid,
    position: Vec2,
    rng: &mut dyn RandomSource,
) -> Option<Direction> {
    let mut candidates = [Direction::Left; 4];
    let mut count = 0;
    for direction in Direction::ALL {
        if can_step(level, position, direction) {
            candidates[count] = direction;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }
    let pick = rng.next(0, count as u64) as usize;
    Some(candidates[pick.min(count - 1)])
}

/// Moves `position` toward `target` by at most `step` on each axis.
///
/// Returns the new position and the facing implied by the X movement, if any.
#[must_use]
pub fn home_toward(position: Vec2, target: Vec2, step: f32) -> (Vec2, Option<Facing>) {
    let mut next = position;
    let mut facing = None;

    if target.x > position.x {
        next.x += step.min(target.x - position.x);
        facing = Some(Facing::Right);
    } else if target.x < position.x {
        next.x -= step.min(position.x - target.x);
        facing = Some(Facing::Left);
    }

    if target.y > position.y {
        next.y += step.min(target.y - position.y);
    } else if target.y < position.y {
        next.y -= step.min(position.y - target.y);
    }

    (next, facing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::EARTH_CELL;
    use crate::random::ScriptedRandom;
    use proptest::prelude::*;

    fn tunnel_level() -> LevelGrid {
        // Horizontal tunnel on row 2 from column 1 to 4
        let mut level = LevelGrid::filled(18, 14, EARTH_CELL);
        for x in 1..=4 {
            level.dig(TileCoord::new(x, 2)).expect("inside grid");
        }
        level
    }

    #[test]
    fn test_can_step_respects_earth() {
        let level = tunnel_level();
        let position = TileCoord::new(2, 2).to_pixel();

        assert!(can_step(&level, position, Direction::Left));
        assert!(can_step(&level, position, Direction::Right));
        assert!(!can_step(&level, position, Direction::Up));
        assert!(!can_step(&level, position, Direction::Down));
    }

    #[test]
    fn test_can_step_respects_playfield_edges() {
        let level = LevelGrid::open(18, 14);

        assert!(!can_step(&level, Vec2::new(0.0, 56.0), Direction::Left));
        assert!(!can_step(&level, Vec2::new(952.0, 56.0), Direction::Right));
        assert!(!can_step(&level, Vec2::new(56.0, 0.0), Direction::Up));
        assert!(!can_step(&level, Vec2::new(56.0, 728.0), Direction::Down));
        assert!(can_step(&level, Vec2::new(896.0, 672.0), Direction::Right));
        assert!(can_step(&level, Vec2::new(896.0, 672.0), Direction::Down));
    }

    #[test]
    fn test_choose_direction_only_returns_walkable() {
        let level = tunnel_level();
        let position = TileCoord::new(1, 2).to_pixel();

        for value in 0..8 {
            let mut rng = ScriptedRandom::new(vec![value]);
            assert_eq!(
                choose_direction(&level, position, &mut rng),
                Some(Direction::Right)
            );
        }
    }

    #[test]
    fn test_choose_direction_picks_among_candidates() {
        let level = tunnel_level();
        let position = TileCoord::new(2, 2).to_pixel();

        let mut rng = ScriptedRandom::new(vec![0, 1]);
        assert_eq!(choose_direction(&level, position, &mut rng), Some(Direction::Left));
        assert_eq!(choose_direction(&level, position, &mut rng), Some(Direction::Right));
    }

    #[test]
    fn test_choose_direction_boxed_in() {
        let level = LevelGrid::filled(18, 14, EARTH_CELL);
        let mut rng = ScriptedRandom::new(vec![0]);

        assert_eq!(choose_direction(&level, Vec2::new(112.0, 112.0), &mut rng), None);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_home_toward_sets_facing() {
        let (next, facing) = home_toward(Vec2::new(112.0, 112.0), Vec2::new(0.0, 224.0), 4.0);
        assert_eq!(next, Vec2::new(108.0, 116.0));
        assert_eq!(facing, Some(Facing::Left));

        let (next, facing) = home_toward(Vec2::new(112.0, 112.0), Vec2::new(112.0, 0.0), 4.0);
        assert_eq!(next, Vec2::new(112.0, 108.0));
        assert_eq!(facing, None);
    }

    proptest! {
        #[test]
        fn prop_home_toward_never_overshoots(
            start in 0u32..200,
            target in 0u32..200,
            step in 1u32..16,
        ) {
            let position = Vec2::new(start as f32, 0.0);
            let goal = Vec2::new(target as f32, 0.0);
            let (next, _) = home_toward(position, goal, step as f32);

            prop_assert!((next.x - goal.x).abs() <= (position.x - goal.x).abs());
            prop_assert!((next.x - position.x).abs() <= step as f32);
        }
    }
}
