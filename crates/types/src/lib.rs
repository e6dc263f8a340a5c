//! Shared types and constants for the raycasting pipeline.
//!
//! Everything in here is plain data with no external dependencies, so the
//! same definitions can be used by the deterministic core, the terminal host
//! and the tests.
//!
//! # Screen geometry
//!
//! The target display is a monochrome bitmap where one byte holds eight
//! horizontal pixels, overlaid by one colour attribute per 8x8 pixel cell.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_COLUMNS` | 32 | Byte columns per row, one ray per column |
//! | `PIX_BUFFER_HEIGHT` | 128 | Rows in the offscreen pixel buffer |
//! | `ATTR_BUFFER_HEIGHT` | 16 | Rows in the offscreen attribute buffer |
//! | `DISPLAY_ROWS` | 192 | Pixel rows of the host screen memory |
//!
//! # Projection
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_DISTANCE` | 32 | Maximum ray steps (distance table length) |
//! | `INIT_WALL_HEIGHT` | `127 << 8` | Height accumulator at the ray origin (8.8) |
//! | `MAX_PROJECTION_HEIGHT` | 64 | Tallest half-height a wall can project to |
//!
//! # Examples
//!
//! ```
//! use raymaze_types::{Angle, Fixed8, Pose};
//!
//! let pose = Pose::new(Fixed8::from_cell_center(10), Fixed8::from_cell_center(3), Angle::new(250));
//! assert_eq!(pose.x.cell(), 10);
//! assert_eq!(pose.heading.offset(10), Angle::new(4));
//! ```

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Screen width in byte columns (8 pixels each); one ray is cast per column.
pub const SCREEN_COLUMNS: usize = 32;

/// Height of the offscreen pixel buffer in rows.
pub const PIX_BUFFER_HEIGHT: usize = 128;

/// Pixel rows covered by one attribute cell.
pub const ATTR_CELL_HEIGHT: usize = 8;

/// Height of the offscreen attribute buffer in rows.
pub const ATTR_BUFFER_HEIGHT: usize = PIX_BUFFER_HEIGHT / ATTR_CELL_HEIGHT;

/// Maximum number of ray steps; also the length of the distance table.
pub const MAX_DISTANCE: usize = 32;

/// Height accumulator value at the ray origin, in 8.8 fixed point.
pub const INIT_WALL_HEIGHT: i32 = 127 << 8;

/// Tallest projected half-height, in pixels.
pub const MAX_PROJECTION_HEIGHT: u8 = (PIX_BUFFER_HEIGHT / 2) as u8;

/// Last distance table entry. Larger than any 8.8 height, so a ray that
/// reaches the final step always comes back as "no wall".
pub const DISTANCE_SENTINEL: i32 = 1 << 16;

/// Byte used for ceiling rows uncovered when a wall shrinks (all paper).
pub const CEILING_FILL: u8 = 0x00;

/// Byte used for floor rows uncovered when a wall shrinks (all ink).
pub const FLOOR_FILL: u8 = 0xff;

/// Attribute the overlay is reset to after every present: green ink, black paper.
pub const DEFAULT_ATTR: u8 = 0x04;

/// Number of entries in the circular angle table.
pub const ANGLE_STEPS: usize = 256;

/// Host screen memory width in bytes.
pub const DISPLAY_WIDTH_BYTES: usize = 32;

/// Host screen memory height in pixel rows.
pub const DISPLAY_ROWS: usize = 192;

/// Host attribute memory height in cells.
pub const DISPLAY_ATTR_ROWS: usize = DISPLAY_ROWS / ATTR_CELL_HEIGHT;

/// Heading change per turn action, in angle units.
pub const TURN_STEP: u8 = 2;

/// A map tile. Zero is empty; any other value is a wall.
pub type TileCode = u8;

/// The empty tile.
pub const EMPTY_TILE: TileCode = 0;

/// Whether a tile blocks rays and movement.
#[inline(always)]
pub const fn is_solid(tile: TileCode) -> bool {
    tile != EMPTY_TILE
}

/// Signed 8.8 fixed-point number.
///
/// The low [`Fixed8::FRAC_BITS`] bits are the fraction. Conversions to whole
/// units use an arithmetic right shift, so negative values round toward
/// negative infinity, and [`Fixed8::cell`] keeps only the low byte of the
/// integer part (a 256-wide wrapping grid index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Fixed8(i32);

impl Fixed8 {
    /// Fraction width in bits.
    pub const FRAC_BITS: u32 = 8;
    /// Mask selecting the fraction.
    pub const FRAC_MASK: i32 = (1 << Self::FRAC_BITS) - 1;
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1 << Self::FRAC_BITS);

    /// Wrap a raw 8.8 value.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Whole number of units.
    #[inline]
    pub const fn from_int(v: i32) -> Self {
        Self(v << Self::FRAC_BITS)
    }

    /// Middle of grid cell `cell`.
    #[inline]
    pub const fn from_cell_center(cell: u8) -> Self {
        Self(((cell as i32) << Self::FRAC_BITS) | (1 << (Self::FRAC_BITS - 1)))
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Integer part (`raw >> 8`).
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> Self::FRAC_BITS
    }

    /// Fractional part (`raw & 0xff`).
    #[inline]
    pub const fn frac(self) -> u8 {
        (self.0 & Self::FRAC_MASK) as u8
    }

    /// Grid cell index: `(raw >> 8) & 0xff`.
    #[inline]
    pub const fn cell(self) -> u8 {
        (self.to_int() & 0xff) as u8
    }
}

impl Add for Fixed8 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Fixed8 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Fixed8 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for Fixed8 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Fixed8 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

/// 8-bit angle: a full turn is 256 units, a quarter turn is 64.
///
/// All arithmetic wraps modulo 256, so any value is a valid index into a
/// 256-entry trig table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Angle(u8);

impl Angle {
    pub const ZERO: Self = Self(0);
    /// 90 degrees.
    pub const QUARTER: Self = Self(64);

    #[inline]
    pub const fn new(v: u8) -> Self {
        Self(v)
    }

    /// Reduce any integer modulo 256.
    #[inline]
    pub const fn wrapped(v: i32) -> Self {
        Self(v.rem_euclid(ANGLE_STEPS as i32) as u8)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Table index, always in `0..ANGLE_STEPS`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// This angle plus `delta` units, wrapped.
    #[inline]
    pub const fn offset(self, delta: i32) -> Self {
        Self::wrapped(self.0 as i32 + delta)
    }
}

/// Player position and heading, supplied once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pose {
    pub x: Fixed8,
    pub y: Fixed8,
    pub heading: Angle,
}

impl Pose {
    pub const fn new(x: Fixed8, y: Fixed8, heading: Angle) -> Self {
        Self { x, y, heading }
    }
}

/// Motion requests produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionAction {
    /// Rotate heading counter-clockwise by [`TURN_STEP`]
    TurnLeft,
    /// Rotate heading clockwise by [`TURN_STEP`]
    TurnRight,
    /// Step one unit vector along the heading
    Forward,
    /// Step one unit vector against the heading
    Backward,
}

impl MotionAction {
    /// Parse action name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use raymaze_types::MotionAction;
    ///
    /// assert_eq!(MotionAction::from_str("forward"), Some(MotionAction::Forward));
    /// assert_eq!(MotionAction::from_str("TurnLeft"), Some(MotionAction::TurnLeft));
    /// assert_eq!(MotionAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "turnleft" | "left" => Some(MotionAction::TurnLeft),
            "turnright" | "right" => Some(MotionAction::TurnRight),
            "forward" | "fwd" => Some(MotionAction::Forward),
            "backward" | "back" => Some(MotionAction::Backward),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MotionAction::TurnLeft => "turnLeft",
            MotionAction::TurnRight => "turnRight",
            MotionAction::Forward => "forward",
            MotionAction::Backward => "backward",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_constants_agree() {
        assert_eq!(ATTR_BUFFER_HEIGHT, 16);
        assert_eq!(MAX_PROJECTION_HEIGHT as usize * 2, PIX_BUFFER_HEIGHT);
        assert!(DISTANCE_SENTINEL > INIT_WALL_HEIGHT);
        assert!(PIX_BUFFER_HEIGHT <= DISPLAY_ROWS);
        assert_eq!(SCREEN_COLUMNS, DISPLAY_WIDTH_BYTES);
    }

    #[test]
    fn fixed_point_shift_and_mask() {
        let v = Fixed8::from_raw(0x0a80);
        assert_eq!(v.to_int(), 10);
        assert_eq!(v.frac(), 0x80);
        assert_eq!(v.cell(), 10);
        assert_eq!(Fixed8::from_cell_center(10), v);
        assert_eq!(Fixed8::from_int(3) + Fixed8::ONE, Fixed8::from_int(4));
    }

    #[test]
    fn negative_fixed_point_wraps_cell_index() {
        let v = Fixed8::from_raw(-1);
        assert_eq!(v.to_int(), -1);
        assert_eq!(v.cell(), 255);
        assert_eq!(v.frac(), 0xff);
    }

    #[test]
    fn angle_wraps_both_directions() {
        assert_eq!(Angle::wrapped(256), Angle::ZERO);
        assert_eq!(Angle::wrapped(-1), Angle::new(255));
        assert_eq!(Angle::new(250).offset(10), Angle::new(4));
        assert_eq!(Angle::new(3).offset(-16), Angle::new(243));
        assert_eq!(Angle::QUARTER.index(), 64);
    }

    #[test]
    fn motion_action_names_round_trip() {
        for action in [
            MotionAction::TurnLeft,
            MotionAction::TurnRight,
            MotionAction::Forward,
            MotionAction::Backward,
        ] {
            assert_eq!(MotionAction::from_str(action.as_str()), Some(action));
        }
    }
}
