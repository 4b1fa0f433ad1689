//! Spawn descriptors handed over by the level loader.

use digdug_common::{LevelError, TileCoord, TILE_SIZE};
use serde::{Deserialize, Serialize};

use crate::level::LevelGrid;
use crate::monster::{MonsterError, MonsterKind, MonsterResult};

/// Where and how a monster enters the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterSpawn {
    /// Spawn tile
    pub tile: TileCoord,
    /// Monster kind
    pub kind: MonsterKind,
    /// Death score multiplier
    pub multiplier: u32,
    /// Walking speed in pixels per frame; must divide the tile size
    pub speed: u32,
}

impl MonsterSpawn {
    /// Creates a spawn descriptor.
    #[must_use]
    pub const fn new(tile: TileCoord, kind: MonsterKind, multiplier: u32, speed: u32) -> Self {
        Self {
            tile,
            kind,
            multiplier,
            speed,
        }
    }

    /// Pooka spawn.
    #[must_use]
    pub const fn pooka(tile: TileCoord, multiplier: u32, speed: u32) -> Self {
        Self::new(tile, MonsterKind::Pooka, multiplier, speed)
    }

    /// Fygar spawn.
    #[must_use]
    pub const fn fygar(tile: TileCoord, multiplier: u32, speed: u32) -> Self {
        Self::new(tile, MonsterKind::Fygar, multiplier, speed)
    }

    /// Checks that the speed lands exactly on tile boundaries.
    pub fn validate_speed(&self) -> MonsterResult<()> {
        let tile = TILE_SIZE as u32;
        if self.speed == 0 || tile % self.speed != 0 {
            return Err(MonsterError::InvalidSpeed(self.speed));
        }
        Ok(())
    }

    /// Checks the speed and that the spawn tile is a dug tile of `level`.
    pub fn validate(&self, level: &LevelGrid) -> MonsterResult<()> {
        self.validate_speed()?;
        if !level.contains(self.tile) {
            return Err(LevelError::OutOfBounds {
                x: self.tile.x,
                y: self.tile.y,
            }
            .into());
        }
        if !level.is_open(self.tile) {
            return Err(MonsterError::SpawnInEarth(self.tile));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::EARTH_CELL;

    #[test]
    fn test_speed_must_divide_tile() {
        assert!(MonsterSpawn::pooka(TileCoord::new(1, 1), 1, 8).validate_speed().is_ok());
        assert!(MonsterSpawn::pooka(TileCoord::new(1, 1), 1, 7).validate_speed().is_ok());
        assert!(matches!(
            MonsterSpawn::pooka(TileCoord::new(1, 1), 1, 5).validate_speed(),
            Err(MonsterError::InvalidSpeed(5))
        ));
        assert!(matches!(
            MonsterSpawn::fygar(TileCoord::new(1, 1), 1, 0).validate_speed(),
            Err(MonsterError::InvalidSpeed(0))
        ));
    }

    #[test]
    fn test_spawn_must_be_inside_and_dug() {
        let mut level = LevelGrid::filled(6, 6, EARTH_CELL);
        level.dig(TileCoord::new(2, 2)).expect("inside grid");

        assert!(MonsterSpawn::pooka(TileCoord::new(2, 2), 1, 4).validate(&level).is_ok());
        assert!(matches!(
            MonsterSpawn::pooka(TileCoord::new(3, 2), 1, 4).validate(&level),
            Err(MonsterError::SpawnInEarth(_))
        ));
        assert!(matches!(
            MonsterSpawn::pooka(TileCoord::new(6, 0), 1, 4).validate(&level),
            Err(MonsterError::Level(LevelError::OutOfBounds { x: 6, y: 0 }))
        ));
    }

    #[test]
    fn test_spawn_deserializes_from_toml() {
        let spawn: MonsterSpawn = toml::from_str(
            "kind = \"Fygar\"\nmultiplier = 2\nspeed = 4\n[tile]\nx = 5\ny = 9\n",
        )
        .expect("valid spawn");

        assert_eq!(spawn, MonsterSpawn::fygar(TileCoord::new(5, 9), 2, 4));
    }
}
