//! Wall texture strips and height-bucket selection.
//!
//! A variant is a bitmap `width` bytes wide, stored row-major, plus one
//! colour attribute per byte column for every 8-row block. Short, distant
//! walls use small variants and the nearest walls use the full-resolution
//! strip, so the pixel art roughly matches the projected size.

use arrayvec::ArrayVec;

use crate::error::{AssetError, AssetResult};
use crate::types::{ATTR_CELL_HEIGHT, MAX_PROJECTION_HEIGHT};

/// Most variants a [`TextureSet`] can hold.
pub const MAX_TEXTURE_VARIANTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureVariant {
    name: &'static str,
    width: usize,
    rows: usize,
    pixels: Vec<u8>,
    attributes: Vec<u8>,
}

impl TextureVariant {
    /// `pixels` must be a whole number of `width`-byte rows; `attributes`
    /// must hold `width` bytes per started 8-row block.
    pub fn new(
        name: &'static str,
        width: usize,
        pixels: Vec<u8>,
        attributes: Vec<u8>,
    ) -> AssetResult<Self> {
        if width == 0 {
            return Err(AssetError::EmptyTexture { name });
        }
        if pixels.is_empty() || pixels.len() % width != 0 {
            return Err(AssetError::TexturePixelLength {
                name,
                expected: (pixels.len() / width + 1) * width,
                actual: pixels.len(),
            });
        }
        let rows = pixels.len() / width;
        let blocks = rows.div_ceil(ATTR_CELL_HEIGHT);
        if attributes.len() != blocks * width {
            return Err(AssetError::TextureAttrLength {
                name,
                expected: blocks * width,
                actual: attributes.len(),
            });
        }
        Ok(Self {
            name,
            width,
            rows,
            pixels,
            attributes,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Pixel byte at `row`, tiling horizontally by screen `column`.
    #[inline(always)]
    pub fn byte(&self, row: usize, column: usize) -> u8 {
        self.pixels[row * self.width + column % self.width]
    }

    /// Attribute for the 8-row block containing `row`.
    #[inline(always)]
    pub fn attr(&self, row: usize, column: usize) -> u8 {
        self.attributes[(row / ATTR_CELL_HEIGHT) * self.width + column % self.width]
    }
}

/// A variant and the tallest wall height it is used for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureBucket {
    pub max_height: u8,
    pub variant: TextureVariant,
}

/// Ordered height buckets. Heights above every threshold use the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSet {
    buckets: ArrayVec<TextureBucket, MAX_TEXTURE_VARIANTS>,
}

impl TextureSet {
    /// Thresholds must be strictly ascending, and each variant must be tall
    /// enough for `2 * height` rows at the largest height its bucket serves.
    pub fn new(buckets: Vec<(u8, TextureVariant)>) -> AssetResult<Self> {
        if buckets.is_empty() || buckets.len() > MAX_TEXTURE_VARIANTS {
            return Err(AssetError::TextureCount {
                max: MAX_TEXTURE_VARIANTS,
                actual: buckets.len(),
            });
        }

        let last = buckets.len() - 1;
        let mut out = ArrayVec::new();
        let mut previous: Option<u8> = None;
        for (i, (max_height, variant)) in buckets.into_iter().enumerate() {
            if let Some(prev) = previous {
                if max_height <= prev {
                    return Err(AssetError::ThresholdOrder {
                        previous: prev,
                        next: max_height,
                    });
                }
            }
            previous = Some(max_height);

            let served = if i == last {
                MAX_PROJECTION_HEIGHT
            } else {
                max_height.min(MAX_PROJECTION_HEIGHT)
            };
            let needed = served as usize * 2;
            if variant.rows() < needed {
                return Err(AssetError::TextureTooShort {
                    name: variant.name(),
                    rows: variant.rows(),
                    needed,
                });
            }
            out.push(TextureBucket {
                max_height,
                variant,
            });
        }

        Ok(Self { buckets: out })
    }

    /// Variant for a projected wall height.
    #[inline]
    pub fn select(&self, height: u8) -> &TextureVariant {
        let last = self.buckets.len() - 1;
        let idx = self
            .buckets
            .iter()
            .position(|b| height <= b.max_height)
            .unwrap_or(last);
        &self.buckets[idx].variant
    }

    pub fn buckets(&self) -> &[TextureBucket] {
        &self.buckets
    }
}
