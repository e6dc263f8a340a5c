//! Tile grid and the map sampler.
//!
//! The grid is read-only level data. Sampling converts an 8.8 world position
//! into a cell with `(raw >> 8) & 0xff` on each axis; anything outside the
//! grid reads as solid so every ray terminates.

use crate::error::{AssetError, AssetResult};
use crate::types::{is_solid, Fixed8, TileCode};

/// Tile returned for cells outside the grid.
pub const BOUNDARY_TILE: TileCode = 0xff;

/// Largest supported side; cell indices are 8-bit.
pub const MAX_GRID_SIDE: usize = 256;

/// Row-major grid of tile codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileCode>,
}

impl Grid {
    /// Build from rows of tiles. Every row must have the same length.
    pub fn from_rows<R: AsRef<[TileCode]>>(rows: &[R]) -> AssetResult<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 || height == 0 || width > MAX_GRID_SIDE || height > MAX_GRID_SIDE {
            return Err(AssetError::GridDimensions { width, height });
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != width {
                return Err(AssetError::RaggedGrid {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            tiles.extend_from_slice(cells);
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Parse an ASCII picture: `.` or space is empty, a digit is that tile
    /// code, any other character is tile 1.
    pub fn from_ascii(lines: &[&str]) -> AssetResult<Self> {
        let rows: Vec<Vec<TileCode>> = lines
            .iter()
            .map(|line| {
                line.chars()
                    .map(|ch| match ch {
                        '.' | ' ' => 0,
                        d @ '0'..='9' => d as u8 - b'0',
                        _ => 1,
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(&rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at cell `(cx, cy)`, or [`BOUNDARY_TILE`] outside the grid.
    #[inline(always)]
    pub fn tile(&self, cx: u8, cy: u8) -> TileCode {
        let (cx, cy) = (cx as usize, cy as usize);
        if cx >= self.width || cy >= self.height {
            return BOUNDARY_TILE;
        }
        self.tiles[cy * self.width + cx]
    }

    /// Map lookup for a world position.
    #[inline(always)]
    pub fn sample(&self, x: Fixed8, y: Fixed8) -> TileCode {
        self.tile(x.cell(), y.cell())
    }

    #[inline(always)]
    pub fn is_solid_at(&self, x: Fixed8, y: Fixed8) -> bool {
        is_solid(self.sample(x, y))
    }
}
