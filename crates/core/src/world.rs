//! Injected, read-only scene data.

use crate::grid::Grid;
use crate::texture::TextureSet;
use crate::trig::SineTable;

/// Everything the pipeline reads but never mutates: level grid, trig table
/// and wall textures. Owned by the caller and lent to each frame.
#[derive(Debug, Clone)]
pub struct World {
    grid: Grid,
    trig: SineTable,
    textures: TextureSet,
}

impl World {
    pub fn new(grid: Grid, trig: SineTable, textures: TextureSet) -> Self {
        tracing::debug!(
            width = grid.width(),
            height = grid.height(),
            variants = textures.buckets().len(),
            "world assembled"
        );
        Self {
            grid,
            trig,
            textures,
        }
    }

    #[inline(always)]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline(always)]
    pub fn trig(&self) -> &SineTable {
        &self.trig
    }

    #[inline(always)]
    pub fn textures(&self) -> &TextureSet {
        &self.textures
    }
}
