//! # DigDug Gameplay
//!
//! Monster behaviour for a tile-based digging arcade game.
//!
//! This crate provides the per-frame monster engine and its narrow
//! collaborator interfaces:
//! - Monster state machine (walking, ghost, dragon, growing, dead)
//! - Tile-constrained random walk and ghost homing
//! - Fire breath hazard owned by fire-breathing monsters
//! - Level grid, hose hazard query, random source
//! - Score/dead-count accumulator
//! - Timing configuration loaded from TOML
//! - A roster that forwards frame updates to every monster of a round

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod context;
pub mod fire;
pub mod hazard;
pub mod level;
pub mod monster;
pub mod movement;
pub mod random;
pub mod roster;
pub mod score;
pub mod spawn;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::context::*;
    pub use crate::fire::*;
    pub use crate::hazard::*;
    pub use crate::level::*;
    pub use crate::monster::*;
    pub use crate::movement::*;
    pub use crate::random::*;
    pub use crate::roster::*;
    pub use crate::score::*;
    pub use crate::spawn::*;
}

pub use prelude::*;
