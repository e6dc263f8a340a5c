//! Frame presenter: offscreen buffers to display memory.
//!
//! The display is reached only through [`DisplaySurface`]. The bundled
//! [`ScreenMemory`] models an 8-bit style screen: a 6144-byte bitmap whose
//! pixel rows are interleaved in memory (placement comes from an injected
//! [`RowAddressTable`]) and a linear 768-byte attribute area.

use crate::buffer::{AttrBuffer, PixelBuffer};
use crate::error::{AssetError, AssetResult};
use crate::types::{DISPLAY_ATTR_ROWS, DISPLAY_ROWS, DISPLAY_WIDTH_BYTES};

/// Size of the bitmap area in bytes.
pub const DISPLAY_PIXEL_BYTES: usize = DISPLAY_WIDTH_BYTES * DISPLAY_ROWS;

/// Size of the attribute area in bytes.
pub const DISPLAY_ATTR_BYTES: usize = DISPLAY_WIDTH_BYTES * DISPLAY_ATTR_ROWS;

/// Destination of a presented frame.
pub trait DisplaySurface {
    /// Copy one bitmap row. `row` is a buffer row index.
    fn write_pixel_row(&mut self, row: usize, bytes: &[u8]);

    /// Copy one attribute row. `row` is an attribute cell row index.
    fn write_attr_row(&mut self, row: usize, bytes: &[u8]);
}

/// Copy every pixel row and attribute row to `surface`, then reset the
/// attribute buffer. The pixel buffer is left as is for the next delta pass.
pub fn present<D: DisplaySurface + ?Sized>(
    pixels: &PixelBuffer,
    attrs: &mut AttrBuffer,
    surface: &mut D,
) {
    for (row, bytes) in pixels.rows().enumerate() {
        surface.write_pixel_row(row, bytes);
    }
    for (row, bytes) in attrs.rows().enumerate() {
        surface.write_attr_row(row, bytes);
    }
    attrs.reset();
}

/// Byte offset of each display pixel row within bitmap memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAddressTable {
    offsets: [usize; DISPLAY_ROWS],
}

impl RowAddressTable {
    /// Classic interleaved layout: the screen is split in thirds of 64 rows,
    /// and within a third consecutive pixel lines of a character row are
    /// 256 bytes apart.
    pub fn interleaved() -> Self {
        let mut offsets = [0usize; DISPLAY_ROWS];
        for (y, offset) in offsets.iter_mut().enumerate() {
            *offset = ((y & 0xc0) << 5) | ((y & 0x07) << 8) | ((y & 0x38) << 2);
        }
        Self { offsets }
    }

    /// Rows stored one after another.
    pub fn linear() -> Self {
        let mut offsets = [0usize; DISPLAY_ROWS];
        for (y, offset) in offsets.iter_mut().enumerate() {
            *offset = y * DISPLAY_WIDTH_BYTES;
        }
        Self { offsets }
    }

    /// Host-supplied table. Every row must fit inside bitmap memory.
    pub fn from_offsets(offsets: &[usize]) -> AssetResult<Self> {
        if offsets.len() != DISPLAY_ROWS {
            return Err(AssetError::RowTableLength {
                expected: DISPLAY_ROWS,
                actual: offsets.len(),
            });
        }
        let mut table = [0usize; DISPLAY_ROWS];
        for (row, (&offset, slot)) in offsets.iter().zip(table.iter_mut()).enumerate() {
            if offset + DISPLAY_WIDTH_BYTES > DISPLAY_PIXEL_BYTES {
                return Err(AssetError::RowOffset { row, offset });
            }
            *slot = offset;
        }
        Ok(Self { offsets: table })
    }

    #[inline(always)]
    pub fn offset(&self, row: usize) -> usize {
        self.offsets[row]
    }
}

impl Default for RowAddressTable {
    fn default() -> Self {
        Self::interleaved()
    }
}

/// In-memory display: bitmap plus attribute area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenMemory {
    pixels: Vec<u8>,
    attrs: Vec<u8>,
    rows: RowAddressTable,
}

impl ScreenMemory {
    pub fn new(rows: RowAddressTable) -> Self {
        Self {
            pixels: vec![0; DISPLAY_PIXEL_BYTES],
            attrs: vec![0; DISPLAY_ATTR_BYTES],
            rows,
        }
    }

    /// Raw bitmap memory, in address order.
    pub fn pixel_memory(&self) -> &[u8] {
        &self.pixels
    }

    /// Raw attribute memory.
    pub fn attr_memory(&self) -> &[u8] {
        &self.attrs
    }

    pub fn row_table(&self) -> &RowAddressTable {
        &self.rows
    }

    /// Byte `column` of display pixel row `row`, resolved through the table.
    #[inline]
    pub fn pixel_byte(&self, row: usize, column: usize) -> u8 {
        self.pixels[self.rows.offset(row) + column]
    }

    /// Ink bit of pixel `(x, y)`; bit 7 of a byte is its leftmost pixel.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixel_byte(y, x / 8) & (0x80 >> (x % 8)) != 0
    }

    /// Attribute of the cell at `(cell_row, column)`.
    #[inline]
    pub fn attr(&self, cell_row: usize, column: usize) -> u8 {
        self.attrs[cell_row * DISPLAY_WIDTH_BYTES + column]
    }
}

impl Default for ScreenMemory {
    fn default() -> Self {
        Self::new(RowAddressTable::default())
    }
}

impl DisplaySurface for ScreenMemory {
    fn write_pixel_row(&mut self, row: usize, bytes: &[u8]) {
        let start = self.rows.offset(row);
        self.pixels[start..start + bytes.len()].copy_from_slice(bytes);
    }

    fn write_attr_row(&mut self, row: usize, bytes: &[u8]) {
        let start = row * DISPLAY_WIDTH_BYTES;
        self.attrs[start..start + bytes.len()].copy_from_slice(bytes);
    }
}
