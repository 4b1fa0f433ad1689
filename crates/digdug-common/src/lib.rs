//! # DigDug Common
//!
//! Common types, utilities, and shared abstractions for the DigDug monster engine.
//!
//! This crate provides foundational types used by the gameplay crate:
//! - Tile and pixel coordinate types, sprite rectangles
//! - ID types (MonsterId)
//! - Millisecond timestamps and stopwatches
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod error;
pub mod ids;
pub mod time;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::error::*;
    pub use crate::ids::*;
    pub use crate::time::*;
}

pub use prelude::*;
