//! Coordinate types for tile and pixel positions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Edge length of one level tile in pixels.
pub const TILE_SIZE: f32 = 56.0;

/// Returns true when both coordinates sit exactly on a tile boundary.
#[must_use]
pub fn is_tile_aligned(position: Vec2) -> bool {
    position.x % TILE_SIZE == 0.0 && position.y % TILE_SIZE == 0.0
}

/// Tile coordinate (column, row) in the level grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TileCoord {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl TileCoord {
    /// Creates a new tile coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the pixel position of the tile's top-left corner.
    #[must_use]
    pub fn to_pixel(self) -> Vec2 {
        Vec2::new(self.x as f32 * TILE_SIZE, self.y as f32 * TILE_SIZE)
    }

    /// Returns the tile containing the given pixel position.
    ///
    /// Truncates toward zero, which matches floor division for the
    /// non-negative positions a playfield uses.
    #[must_use]
    pub fn from_pixel(position: Vec2) -> Self {
        Self {
            x: (position.x / TILE_SIZE) as i32,
            y: (position.y / TILE_SIZE) as i32,
        }
    }

    /// Returns the neighbouring tile offset by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a one-tile rectangle whose top-left corner is `position`.
    #[must_use]
    pub fn tile_at(position: Vec2) -> Self {
        Self::new(position.x, position.y, TILE_SIZE, TILE_SIZE)
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Checks if this rectangle overlaps another. Shared edges do not count.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}
