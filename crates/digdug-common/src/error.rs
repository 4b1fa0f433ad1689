//! Error types for the DigDug monster engine.

use thiserror::Error;

/// Top-level error type for DigDug operations.
#[derive(Debug, Error)]
pub enum DigDugError {
    /// Level grid errors
    #[error("Level error: {0}")]
    Level(#[from] LevelError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Level grid errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    /// Grid has no cells
    #[error("Level grid is empty")]
    Empty,

    /// A row has a different length than the first row
    #[error("Row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// Row index
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of this row
        actual: usize,
    },

    /// A tile coordinate lies outside the grid
    #[error("Tile ({x}, {y}) is outside the level grid")]
    OutOfBounds {
        /// Column
        x: i32,
        /// Row
        y: i32,
    },
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// TOML could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A random range has `min >= max`
    #[error("Invalid range for {name}: [{min}, {max})")]
    InvalidRange {
        /// Setting name
        name: &'static str,
        /// Lower bound
        min: u64,
        /// Exclusive upper bound
        max: u64,
    },

    /// A value that must be positive is zero
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Result type alias for DigDug operations.
pub type DigDugResult<T> = Result<T, DigDugError>;

/// Result type alias for level operations.
pub type LevelResult<T> = Result<T, LevelError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
