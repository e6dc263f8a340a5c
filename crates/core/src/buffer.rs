//! Offscreen byte buffers, addressed by `(row, column)`.
//!
//! Rows are `SCREEN_COLUMNS` bytes and stored top to bottom, the same
//! row-major order the display copy walks.

use crate::types::{
    ATTR_BUFFER_HEIGHT, CEILING_FILL, DEFAULT_ATTR, FLOOR_FILL, PIX_BUFFER_HEIGHT, SCREEN_COLUMNS,
};

/// Fixed-size byte grid `SCREEN_COLUMNS` wide and `ROWS` tall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBuffer<const ROWS: usize> {
    rows: [[u8; SCREEN_COLUMNS]; ROWS],
}

/// Monochrome pixels: one byte is eight horizontal pixels, MSB leftmost.
pub type PixelBuffer = ByteBuffer<PIX_BUFFER_HEIGHT>;

/// Colour attributes: one byte per 8x8 pixel cell.
pub type AttrBuffer = ByteBuffer<ATTR_BUFFER_HEIGHT>;

impl<const ROWS: usize> ByteBuffer<ROWS> {
    pub fn filled(value: u8) -> Self {
        Self {
            rows: [[value; SCREEN_COLUMNS]; ROWS],
        }
    }

    pub const fn height(&self) -> usize {
        ROWS
    }

    pub const fn width(&self) -> usize {
        SCREEN_COLUMNS
    }

    #[inline(always)]
    pub fn get(&self, row: usize, column: usize) -> u8 {
        self.rows[row][column]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, column: usize, value: u8) {
        self.rows[row][column] = value;
    }

    #[inline(always)]
    pub fn row(&self, row: usize) -> &[u8; SCREEN_COLUMNS] {
        &self.rows[row]
    }

    /// Rows in top-to-bottom order.
    pub fn rows(&self) -> impl Iterator<Item = &[u8; SCREEN_COLUMNS]> + '_ {
        self.rows.iter()
    }

    /// Write `value` into `column` for every row in `start..end`.
    #[inline]
    pub fn fill_column(&mut self, column: usize, start: usize, end: usize, value: u8) {
        for row in &mut self.rows[start..end] {
            row[column] = value;
        }
    }

    pub fn fill(&mut self, value: u8) {
        for row in self.rows.iter_mut() {
            row.fill(value);
        }
    }
}

impl PixelBuffer {
    /// Empty scene: ceiling fill on the upper half, floor fill on the lower.
    pub fn new() -> Self {
        let mut buf = Self::filled(CEILING_FILL);
        for row in &mut buf.rows[PIX_BUFFER_HEIGHT / 2..] {
            row.fill(FLOOR_FILL);
        }
        buf
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl AttrBuffer {
    pub fn new() -> Self {
        Self::filled(DEFAULT_ATTR)
    }

    /// Back to [`DEFAULT_ATTR`] for the next frame.
    pub fn reset(&mut self) {
        self.fill(DEFAULT_ATTR);
    }
}

impl Default for AttrBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pixel_buffer_splits_ceiling_and_floor() {
        let buf = PixelBuffer::new();
        assert_eq!(buf.get(0, 0), CEILING_FILL);
        assert_eq!(buf.get(PIX_BUFFER_HEIGHT / 2 - 1, 31), CEILING_FILL);
        assert_eq!(buf.get(PIX_BUFFER_HEIGHT / 2, 0), FLOOR_FILL);
        assert_eq!(buf.get(PIX_BUFFER_HEIGHT - 1, 31), FLOOR_FILL);
    }

    #[test]
    fn fill_column_touches_only_that_column() {
        let mut buf = AttrBuffer::new();
        buf.fill_column(3, 2, 5, 0x47);
        assert_eq!(buf.get(2, 3), 0x47);
        assert_eq!(buf.get(4, 3), 0x47);
        assert_eq!(buf.get(5, 3), DEFAULT_ATTR);
        assert_eq!(buf.get(3, 2), DEFAULT_ATTR);
        buf.reset();
        assert!(buf.rows().all(|r| r.iter().all(|&b| b == DEFAULT_ATTR)));
    }
}
