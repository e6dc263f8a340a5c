//! Asset validation errors.
//!
//! The render pipeline itself cannot fail. The only fallible step is
//! accepting injected asset data (trig table, grid, textures), which is
//! checked once when a [`crate::World`] is assembled.

use thiserror::Error;

/// Rejected asset data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("sine table must have {expected} entries, got {actual}")]
    SineTableLength { expected: usize, actual: usize },

    #[error("grid must be between 1x1 and 256x256 cells, got {width}x{height}")]
    GridDimensions { width: usize, height: usize },

    #[error("grid row {row} has {actual} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("texture '{name}' has width 0")]
    EmptyTexture { name: &'static str },

    #[error("texture '{name}' has {actual} pixel bytes, expected {expected}")]
    TexturePixelLength {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("texture '{name}' has {actual} attribute bytes, expected {expected}")]
    TextureAttrLength {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("texture '{name}' has {rows} rows but its bucket draws up to {needed}")]
    TextureTooShort {
        name: &'static str,
        rows: usize,
        needed: usize,
    },

    #[error("texture bucket thresholds must be strictly ascending ({previous} then {next})")]
    ThresholdOrder { previous: u8, next: u8 },

    #[error("texture set needs between 1 and {max} variants, got {actual}")]
    TextureCount { max: usize, actual: usize },

    #[error("row address table must have {expected} entries, got {actual}")]
    RowTableLength { expected: usize, actual: usize },

    #[error("display row {row} at offset {offset} runs past bitmap memory")]
    RowOffset { row: usize, offset: usize },
}

pub type AssetResult<T> = Result<T, AssetError>;
