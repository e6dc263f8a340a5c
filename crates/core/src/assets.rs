//! Built-in asset data: trig table, level grid and corn-stalk wall textures.
//!
//! These stand in for the static data a host would normally load. Only the
//! texture bitmaps are generated, once, when [`standard_textures`] is called.

use crate::error::AssetResult;
use crate::grid::Grid;
use crate::texture::{TextureSet, TextureVariant};
use crate::trig::SineTable;
use crate::types::{Angle, Fixed8, Pose, ANGLE_STEPS};
use crate::world::World;

/// Sine in 8.8, amplitude 127, period 256.
#[rustfmt::skip]
pub const SINE_TABLE: [i16; ANGLE_STEPS] = [
    0, 3, 6, 9, 12, 16, 19, 22, 25, 28, 31, 34, 37, 40, 43, 46,
    49, 51, 54, 57, 60, 63, 65, 68, 71, 73, 76, 78, 81, 83, 85, 88,
    90, 92, 94, 96, 98, 100, 102, 104, 106, 107, 109, 110, 112, 113, 115, 116,
    117, 118, 120, 121, 122, 122, 123, 124, 125, 125, 126, 126, 126, 127, 127, 127,
    127, 127, 127, 127, 126, 126, 126, 125, 125, 124, 123, 122, 122, 121, 120, 118,
    117, 116, 115, 113, 112, 110, 109, 107, 106, 104, 102, 100, 98, 96, 94, 92,
    90, 88, 85, 83, 81, 78, 76, 73, 71, 68, 65, 63, 60, 57, 54, 51,
    49, 46, 43, 40, 37, 34, 31, 28, 25, 22, 19, 16, 12, 9, 6, 3,
    0, -3, -6, -9, -12, -16, -19, -22, -25, -28, -31, -34, -37, -40, -43, -46,
    -49, -51, -54, -57, -60, -63, -65, -68, -71, -73, -76, -78, -81, -83, -85, -88,
    -90, -92, -94, -96, -98, -100, -102, -104, -106, -107, -109, -110, -112, -113, -115, -116,
    -117, -118, -120, -121, -122, -122, -123, -124, -125, -125, -126, -126, -126, -127, -127, -127,
    -127, -127, -127, -127, -126, -126, -126, -125, -125, -124, -123, -122, -122, -121, -120, -118,
    -117, -116, -115, -113, -112, -110, -109, -107, -106, -104, -102, -100, -98, -96, -94, -92,
    -90, -88, -85, -83, -81, -78, -76, -73, -71, -68, -65, -63, -60, -57, -54, -51,
    -49, -46, -43, -40, -37, -34, -31, -28, -25, -22, -19, -16, -12, -9, -6, -3,
];

/// 32x32 maze. `#` is a wall, `.` is open floor.
pub const STANDARD_MAZE: [&str; 32] = [
    "################################",
    "#..............#...............#",
    "#.####.#######.#.#####.#######.#",
    "#.#....#.....#.#.#...#.......#.#",
    "#.#.####.###.#.#.#.#.#######.#.#",
    "#.#......#...#...#.#.........#.#",
    "#.########.#######.###########.#",
    "#..........#.....#.............#",
    "######.#####.###.#####.#########",
    "#......#.....#.#.....#.#.......#",
    "#.######.#####.#####.#.#.#####.#",
    "#........#.........#...#.#...#.#",
    "#.########.#######.#####.#.#.#.#",
    "#.#......#.#.....#.......#.#...#",
    "#.#.####.#.#.###.#########.#####",
    "#...#....#...#.................#",
    "###.#.########.###############.#",
    "#...#.#......#.#.............#.#",
    "#.###.#.####.#.#.###########.#.#",
    "#.#...#.#....#.#.#.........#.#.#",
    "#.#.###.#.####.#.#.#######.#.#.#",
    "#.#.....#......#.#.#.....#.#...#",
    "#.#############..#.#.###.#.#####",
    "#.................#..#...#.....#",
    "#.#####.#########.####.#######.#",
    "#.#...#.#.......#......#.....#.#",
    "#.#.#.#.#.#####.########.###.#.#",
    "#...#...#.#...#..........#...#.#",
    "#####.###.#.#.############.###.#",
    "#.........#.#..................#",
    "#...........#..................#",
    "################################",
];

/// Open cell in the west corridor of [`STANDARD_MAZE`], facing east.
pub const START_POSE: Pose = Pose::new(
    Fixed8::from_cell_center(4),
    Fixed8::from_cell_center(11),
    Angle::ZERO,
);

/// Bytes per texture row.
pub const CORN_WIDTH: usize = 8;

/// (bucket threshold, texture rows) for the five corn variants.
const CORN_BUCKETS: [(u8, usize); 5] = [(4, 8), (8, 16), (16, 32), (32, 64), (64, 128)];

const CORN_NAMES: [&str; 5] = ["corn_0", "corn_1", "corn_2", "corn_3", "corn_4"];

const STALK: u8 = 0x18;
const TASSEL: u8 = 0x3c;

// Attributes: ink in bits 0-2, paper in bits 3-5, bright in bit 6.
const ATTR_FAR: u8 = 0x04;
const ATTR_LEAF: u8 = 0x44;
const ATTR_TASSEL: u8 = 0x46;

pub fn sine_table() -> SineTable {
    SineTable::new(SINE_TABLE)
}

pub fn standard_grid() -> AssetResult<Grid> {
    Grid::from_ascii(&STANDARD_MAZE)
}

fn corn_pixels(rows: usize) -> Vec<u8> {
    let leaf_gap = (rows / 8).max(2);
    let tassel_rows = (rows / 8).max(1);
    let mut out = Vec::with_capacity(rows * CORN_WIDTH);
    for row in 0..rows {
        let leaf = row / leaf_gap;
        for col in 0..CORN_WIDTH {
            let left = (leaf + col) % 2 == 0;
            let byte = if row < tassel_rows {
                STALK | TASSEL
            } else if row % leaf_gap == 0 {
                STALK | if left { 0xe0 } else { 0x07 }
            } else if row % leaf_gap == 1 && leaf_gap > 2 {
                STALK | if left { 0x60 } else { 0x06 }
            } else {
                STALK
            };
            out.push(byte);
        }
    }
    out
}

fn corn_attributes(rows: usize) -> Vec<u8> {
    let blocks = rows.div_ceil(8);
    let mut out = Vec::with_capacity(blocks * CORN_WIDTH);
    for block in 0..blocks {
        let attr = match (rows, block) {
            (0..=8, _) => ATTR_FAR,
            (_, 0) => ATTR_TASSEL,
            _ => ATTR_LEAF,
        };
        out.extend(std::iter::repeat(attr).take(CORN_WIDTH));
    }
    out
}

/// The five corn variants, 8 to 128 rows tall.
pub fn standard_textures() -> AssetResult<TextureSet> {
    let mut buckets = Vec::with_capacity(CORN_BUCKETS.len());
    for (&(threshold, rows), &name) in CORN_BUCKETS.iter().zip(CORN_NAMES.iter()) {
        let variant =
            TextureVariant::new(name, CORN_WIDTH, corn_pixels(rows), corn_attributes(rows))?;
        buckets.push((threshold, variant));
    }
    TextureSet::new(buckets)
}

/// Maze, trig table and textures together.
pub fn standard_world() -> AssetResult<World> {
    Ok(World::new(standard_grid()?, sine_table(), standard_textures()?))
}
