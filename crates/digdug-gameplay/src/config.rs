//! Monster timing configuration.
//!
//! All durations are milliseconds. Configuration can be loaded from a TOML
//! file; missing keys fall back to the arcade defaults.

use digdug_common::{ConfigError, ConfigResult, DigDugResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Timing parameters shared by all monsters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterConfig {
    // === Fire breath ===
    /// Lower bound of the random walking time before a Fygar breathes fire
    pub fire_cycle_min_ms: u64,
    /// Exclusive upper bound of that random time
    pub fire_cycle_max_ms: u64,
    /// How long the fire stays out
    pub dragon_duration_ms: u64,

    // === Ghost ===
    /// Lower bound of the random walking time before turning into a ghost
    pub ghost_cooldown_min_ms: u64,
    /// Exclusive upper bound of that random time
    pub ghost_cooldown_max_ms: u64,
    /// Minimum time spent as a ghost
    pub ghost_min_duration_ms: u64,
    /// Match time that must pass before any monster may ghost
    pub ghost_warmup_ms: u64,

    // === Squeeze ===
    /// Interval between squeeze resolutions while caught by the hose
    pub squeeze_tick_ms: u64,
    /// Squeeze level at which the monster dies
    pub squeeze_death_count: u8,

    // === Death ===
    /// How long the dead sprite stays visible
    pub death_duration_ms: u64,

    // === Walk animation ===
    /// Time after which the second walk frame is shown
    pub walk_frame_ms: u64,
    /// Time after which the base walk frame is shown again
    pub walk_rest_ms: u64,
}

impl Default for MonsterConfig {
    fn default() -> Self {
        Self {
            // Fire breath
            fire_cycle_min_ms: 10_000,
            fire_cycle_max_ms: 20_000,
            dragon_duration_ms: 2_000,

            // Ghost
            ghost_cooldown_min_ms: 10_000,
            ghost_cooldown_max_ms: 20_000,
            ghost_min_duration_ms: 1_000,
            ghost_warmup_ms: 5_000,

            // Squeeze
            squeeze_tick_ms: 1_000,
            squeeze_death_count: 4,

            // Death
            death_duration_ms: 1_000,

            // Walk animation
            walk_frame_ms: 500,
            walk_rest_ms: 250,
        }
    }
}

impl MonsterConfig {
    /// Checks ranges and non-zero values.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.fire_cycle_min_ms >= self.fire_cycle_max_ms {
            return Err(ConfigError::InvalidRange {
                name: "fire_cycle",
                min: self.fire_cycle_min_ms,
                max: self.fire_cycle_max_ms,
            });
        }
        if self.ghost_cooldown_min_ms >= self.ghost_cooldown_max_ms {
            return Err(ConfigError::InvalidRange {
                name: "ghost_cooldown",
                min: self.ghost_cooldown_min_ms,
                max: self.ghost_cooldown_max_ms,
            });
        }
        if self.squeeze_tick_ms == 0 {
            return Err(ConfigError::Zero("squeeze_tick_ms"));
        }
        if self.squeeze_death_count == 0 {
            return Err(ConfigError::Zero("squeeze_death_count"));
        }
        if self.walk_rest_ms >= self.walk_frame_ms {
            return Err(ConfigError::InvalidRange {
                name: "walk_animation",
                min: self.walk_rest_ms,
                max: self.walk_frame_ms,
            });
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    pub fn read_from<P: AsRef<Path>>(path: P) -> DigDugResult<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&contents)?)
    }

    /// Loads configuration from a file.
    /// Returns the defaults if the file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Monster config not found, using defaults");
            return Self::default();
        }

        match Self::read_from(path) {
            Ok(config) => {
                info!("Loaded monster config from {}", path.display());
                config
            },
            Err(e) => {
                warn!("Failed to load monster config: {e}");
                Self::default()
            },
        }
    }
}
