//! Read-only view of the dug level.
//!
//! Each cell is one tile. A value of [`OPEN_CELL`] means the tunnel has been
//! dug and monsters may walk into it; any other value blocks them.

use digdug_common::{LevelError, LevelResult, TileCoord, TILE_SIZE};
use serde::{Deserialize, Serialize};

/// Cell value of a dug, walkable tile.
pub const OPEN_CELL: u8 = 0;

/// Cell value used for undug earth.
pub const EARTH_CELL: u8 = 1;

/// Level grid indexed by `[tile_x, tile_y]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelGrid {
    width: usize,
    height: usize,
    /// Row-major cells
    cells: Vec<u8>,
}

impl LevelGrid {
    /// Creates a grid of the given size filled with `value`.
    #[must_use]
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    /// Creates a fully dug grid.
    #[must_use]
    pub fn open(width: usize, height: usize) -> Self {
        Self::filled(width, height, OPEN_CELL)
    }

    /// Creates a grid from rows of cells (`rows[y][x]`).
    pub fn from_rows(rows: &[Vec<u8>]) -> LevelResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(LevelError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(LevelError::RaggedRow {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Width in tiles.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Checks whether a tile lies inside the grid.
    #[must_use]
    pub fn contains(&self, tile: TileCoord) -> bool {
        tile.x >= 0 && tile.y >= 0 && (tile.x as usize) < self.width && (tile.y as usize) < self.height
    }

    /// Returns the cell value at a tile, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, tile: TileCoord) -> Option<u8> {
        if !self.contains(tile) {
            return None;
        }
        Some(self.cells[tile.y as usize * self.width + tile.x as usize])
    }

    /// Sets the cell value at a tile.
    pub fn set(&mut self, tile: TileCoord, value: u8) -> LevelResult<()> {
        if !self.contains(tile) {
            return Err(LevelError::OutOfBounds {
                x: tile.x,
                y: tile.y,
            });
        }
        self.cells[tile.y as usize * self.width + tile.x as usize] = value;
        Ok(())
    }

    /// Marks a tile as dug.
    pub fn dig(&mut self, tile: TileCoord) -> LevelResult<()> {
        self.set(tile, OPEN_CELL)
    }

    /// Checks whether a tile is dug. Tiles outside the grid are never open.
    #[must_use]
    pub fn is_open(&self, tile: TileCoord) -> bool {
        self.get(tile) == Some(OPEN_CELL)
    }

    /// Largest tile-aligned pixel X inside the playfield.
    #[must_use]
    pub fn max_pixel_x(&self) -> f32 {
        self.width.saturating_sub(1) as f32 * TILE_SIZE
    }

    /// Largest tile-aligned pixel Y inside the playfield.
    #[must_use]
    pub fn max_pixel_y(&self) -> f32 {
        self.height.saturating_sub(1) as f32 * TILE_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_playfield_bounds() {
        let level = LevelGrid::filled(18, 14, EARTH_CELL);
        assert_eq!(level.max_pixel_x(), 952.0);
        assert_eq!(level.max_pixel_y(), 728.0);
    }

    #[test]
    fn test_from_rows_indexes_by_column_then_row() {
        let level = LevelGrid::from_rows(&[vec![1, 0, 1], vec![1, 1, 0]]).expect("valid grid");

        assert_eq!(level.width(), 3);
        assert_eq!(level.height(), 2);
        assert!(level.is_open(TileCoord::new(1, 0)));
        assert!(level.is_open(TileCoord::new(2, 1)));
        assert!(!level.is_open(TileCoord::new(0, 1)));
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert_eq!(LevelGrid::from_rows(&[]), Err(LevelError::Empty));
        assert_eq!(
            LevelGrid::from_rows(&[vec![0, 0], vec![0]]),
            Err(LevelError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_outside_grid_is_blocked() {
        let level = LevelGrid::open(4, 4);
        assert!(!level.is_open(TileCoord::new(-1, 0)));
        assert!(!level.is_open(TileCoord::new(4, 0)));
        assert_eq!(level.get(TileCoord::new(0, 4)), None);
    }

    #[test]
    fn test_dig() {
        let mut level = LevelGrid::filled(4, 4, EARTH_CELL);
        level.dig(TileCoord::new(2, 3)).expect("inside grid");
        assert!(level.is_open(TileCoord::new(2, 3)));
        assert_eq!(
            level.dig(TileCoord::new(9, 9)),
            Err(LevelError::OutOfBounds { x: 9, y: 9 })
        );
    }
}
