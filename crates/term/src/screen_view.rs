//! ScreenView: maps display memory into a terminal framebuffer.
//!
//! Pure (no I/O). The bitmap is drawn with braille glyphs, one dot per pixel
//! (or per 2x2 pixel block at half density), coloured by the attribute cell
//! that covers it.

use crate::core::{FrameStats, ScreenMemory};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Pose, ATTR_CELL_HEIGHT, DISPLAY_WIDTH_BYTES, PIX_BUFFER_HEIGHT};

const SCREEN_PIXELS_WIDE: u16 = (DISPLAY_WIDTH_BYTES * 8) as u16;
const SCREEN_PIXELS_TALL: u16 = PIX_BUFFER_HEIGHT as u16;

/// Braille dot bit for `[dx][dy]` inside a 2x4 glyph.
const DOT_BITS: [[u8; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

const HUD_LINES: u16 = 1;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Source pixels per braille dot along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    /// One pixel per dot: 128x32 cells.
    Full,
    /// A 2x2 pixel block per dot, lit if any pixel is: 64x16 cells.
    Half,
}

impl Density {
    const fn scale(self) -> u16 {
        match self {
            Density::Full => 1,
            Density::Half => 2,
        }
    }

    /// Densest mode whose screen and status line fit in `viewport`.
    pub fn fit(viewport: Viewport) -> Self {
        let (w, h) = ScreenView::new(Density::Full).size();
        if viewport.width >= w && viewport.height >= h {
            Density::Full
        } else {
            Density::Half
        }
    }
}

/// Player and frame numbers for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudStatus {
    pub pose: Pose,
    pub stats: FrameStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenView {
    density: Density,
    color: bool,
}

impl Default for ScreenView {
    fn default() -> Self {
        Self::new(Density::Full)
    }
}

impl ScreenView {
    pub fn new(density: Density) -> Self {
        Self {
            density,
            color: true,
        }
    }

    /// Draw attributes in colour (default) or monochrome.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn density(&self) -> Density {
        self.density
    }

    /// Cells covered by the screen alone.
    pub fn screen_cells(&self) -> (u16, u16) {
        let s = self.density.scale();
        (SCREEN_PIXELS_WIDE / (2 * s), SCREEN_PIXELS_TALL / (4 * s))
    }

    /// Cells needed for the screen plus the status line.
    pub fn size(&self) -> (u16, u16) {
        let (w, h) = self.screen_cells();
        (w, h + HUD_LINES)
    }

    /// Render into a fresh framebuffer sized to `viewport`.
    pub fn render(
        &self,
        screen: &ScreenMemory,
        hud: Option<&HudStatus>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(screen, hud, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer. Does not allocate unless the
    /// viewport size changed.
    pub fn render_into(
        &self,
        screen: &ScreenMemory,
        hud: Option<&HudStatus>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (cells_w, cells_h) = self.screen_cells();
        let (_, total_h) = self.size();
        let origin_x = viewport.width.saturating_sub(cells_w) / 2;
        let origin_y = viewport.height.saturating_sub(total_h) / 2;

        let s = self.density.scale();
        for cy in 0..cells_h {
            for cx in 0..cells_w {
                let px = cx * 2 * s;
                let py = cy * 4 * s;
                let mut bits = 0u8;
                for (dx, column) in DOT_BITS.iter().enumerate() {
                    for (dy, &bit) in column.iter().enumerate() {
                        let x = px + dx as u16 * s;
                        let y = py + dy as u16 * s;
                        if block_lit(screen, x, y, s) {
                            bits |= bit;
                        }
                    }
                }
                let attr = screen.attr(py as usize / ATTR_CELL_HEIGHT, px as usize / 8);
                fb.put_char(
                    origin_x + cx,
                    origin_y + cy,
                    braille(bits),
                    self.style_for(attr),
                );
            }
        }

        if let Some(hud) = hud {
            draw_hud(fb, origin_x, origin_y + cells_h, hud);
        }
    }

    fn style_for(&self, attr: u8) -> CellStyle {
        if self.color {
            CellStyle::from_attr(attr)
        } else {
            CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK)
        }
    }
}

#[inline]
fn block_lit(screen: &ScreenMemory, x: u16, y: u16, size: u16) -> bool {
    (0..size).any(|oy| (0..size).any(|ox| screen.pixel((x + ox) as usize, (y + oy) as usize)))
}

#[inline]
fn braille(bits: u8) -> char {
    char::from_u32(0x2800 + bits as u32).unwrap_or(' ')
}

fn draw_hud(fb: &mut FrameBuffer, x: u16, y: u16, hud: &HudStatus) {
    let label = CellStyle {
        fg: Rgb::new(150, 150, 160),
        bg: Rgb::BLACK,
        bold: false,
        dim: true,
    };
    let value = CellStyle {
        fg: Rgb::new(230, 230, 230),
        bg: Rgb::BLACK,
        bold: true,
        dim: false,
    };

    let pose = hud.pose;
    let mut cx = fb.put_str(x, y, "X ", label);
    cx = put_fixed(fb, cx, y, pose.x.to_int(), pose.x.frac(), value);
    cx = fb.put_str(cx, y, "  Y ", label);
    cx = put_fixed(fb, cx, y, pose.y.to_int(), pose.y.frac(), value);
    cx = fb.put_str(cx, y, "  HDG ", label);
    cx = fb.put_u32(cx, y, pose.heading.value() as u32, 3, value);
    cx = fb.put_str(cx, y, "  WALLS ", label);
    cx = fb.put_u32(cx, y, hud.stats.visible_columns as u32, 2, value);
    cx = fb.put_str(cx, y, "  DIRTY ", label);
    cx = fb.put_u32(cx, y, hud.stats.dirty_columns as u32, 2, value);
    cx = fb.put_str(cx, y, "  FRAME ", label);
    fb.put_u32(cx, y, hud.stats.frame.min(u32::MAX as u64) as u32, 6, value);
}

/// `int.frac` with the fraction shown in 256ths.
fn put_fixed(fb: &mut FrameBuffer, x: u16, y: u16, int: i32, frac: u8, style: CellStyle) -> u16 {
    let mut cx = x;
    if int < 0 {
        cx = fb.put_str(cx, y, "-", style);
    }
    cx = fb.put_u32(cx, y, int.unsigned_abs(), 3, style);
    cx = fb.put_str(cx, y, ".", style);
    fb.put_u32(cx, y, frac as u32, 3, style)
}
