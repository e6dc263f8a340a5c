//! Wall compositor with per-column delta redraw.
//!
//! The pixel buffer is never cleared between frames. A column is redrawn
//! only when its height changed, and when a wall shrinks the rows it used to
//! cover are repainted with the ceiling or floor fill. The attribute overlay
//! is coarse and cheap, so it is repainted in full every frame instead.

use crate::buffer::{AttrBuffer, PixelBuffer};
use crate::texture::{TextureSet, TextureVariant};
use crate::tracer::ColumnHeights;
use crate::types::{
    ATTR_CELL_HEIGHT, CEILING_FILL, FLOOR_FILL, MAX_PROJECTION_HEIGHT, PIX_BUFFER_HEIGHT,
    SCREEN_COLUMNS,
};

/// Draw one wall strip of `height` into `column`, given that the column
/// currently shows a wall of `old_height`.
///
/// The strip is vertically centred: it starts at `PIX_BUFFER_HEIGHT / 2 -
/// height` and spans `height * 2` rows, row `i` sourced from texture row `i`.
/// Both heights must be at most [`MAX_PROJECTION_HEIGHT`].
pub fn draw_wall_strip(
    pixels: &mut PixelBuffer,
    variant: &TextureVariant,
    column: usize,
    height: u8,
    old_height: u8,
) {
    let center = PIX_BUFFER_HEIGHT / 2;
    let top = center - height as usize;
    let old_top = center - old_height as usize;
    let shrank = top > old_top;

    if shrank {
        pixels.fill_column(column, old_top, top, CEILING_FILL);
    }

    for i in 0..height as usize * 2 {
        pixels.set(top + i, column, variant.byte(i, column));
    }

    if shrank {
        pixels.fill_column(
            column,
            PIX_BUFFER_HEIGHT - top,
            PIX_BUFFER_HEIGHT - old_top,
            FLOOR_FILL,
        );
    }
}

/// Owns the offscreen buffers and the previous frame's heights.
#[derive(Debug, Clone)]
pub struct Compositor {
    pixels: PixelBuffer,
    attrs: AttrBuffer,
    previous: ColumnHeights,
}

impl Compositor {
    pub fn new() -> Self {
        Self {
            pixels: PixelBuffer::new(),
            attrs: AttrBuffer::new(),
            previous: [0; SCREEN_COLUMNS],
        }
    }

    /// Redraw `column` at `height` if it differs from the last drawn height.
    ///
    /// Returns whether anything was drawn. The height is clamped to
    /// [`MAX_PROJECTION_HEIGHT`] first.
    pub fn composite(&mut self, textures: &TextureSet, column: usize, height: u8) -> bool {
        let height = height.min(MAX_PROJECTION_HEIGHT);
        let old = self.previous[column];
        if height == old {
            return false;
        }
        draw_wall_strip(&mut self.pixels, textures.select(height), column, height, old);
        self.previous[column] = height;
        true
    }

    /// Composite every column; returns how many were dirty.
    pub fn composite_frame(&mut self, textures: &TextureSet, heights: &ColumnHeights) -> usize {
        let mut dirty = 0;
        for (column, &height) in heights.iter().enumerate() {
            if self.composite(textures, column, height) {
                dirty += 1;
            }
        }
        dirty
    }

    /// Paint wall colours into the attribute overlay for every visible column.
    ///
    /// Each attribute cell touched by a strip takes the texture attribute of
    /// the first wall row inside that cell.
    pub fn paint_attributes(&mut self, textures: &TextureSet, heights: &ColumnHeights) {
        let center = PIX_BUFFER_HEIGHT / 2;
        for (column, &height) in heights.iter().enumerate() {
            let height = height.min(MAX_PROJECTION_HEIGHT);
            if height == 0 {
                continue;
            }
            let variant = textures.select(height);
            let top = center - height as usize;
            let bottom = top + height as usize * 2;
            for cell in top / ATTR_CELL_HEIGHT..bottom.div_ceil(ATTR_CELL_HEIGHT) {
                let first_row = (cell * ATTR_CELL_HEIGHT).max(top);
                self.attrs.set(cell, column, variant.attr(first_row - top, column));
            }
        }
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn attrs(&self) -> &AttrBuffer {
        &self.attrs
    }

    /// Pixel buffer for reading and attribute buffer for resetting, as the
    /// presenter needs them.
    pub fn buffers_mut(&mut self) -> (&PixelBuffer, &mut AttrBuffer) {
        (&self.pixels, &mut self.attrs)
    }

    /// Heights as of the last composite.
    pub fn previous_heights(&self) -> &ColumnHeights {
        &self.previous
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}
