//! 256-entry fixed-point sine table.
//!
//! Entries are injected asset data (see [`crate::assets::SINE_TABLE`]) and are
//! never recomputed. Values are 8.8 fractions, so an entry of 127 is a step of
//! roughly half a grid cell.

use crate::error::{AssetError, AssetResult};
use crate::types::{Angle, Fixed8, ANGLE_STEPS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SineTable {
    values: [i16; ANGLE_STEPS],
}

impl SineTable {
    pub const fn new(values: [i16; ANGLE_STEPS]) -> Self {
        Self { values }
    }

    /// Build from exactly [`ANGLE_STEPS`] entries.
    pub fn from_slice(values: &[i16]) -> AssetResult<Self> {
        let values: [i16; ANGLE_STEPS] =
            values
                .try_into()
                .map_err(|_| AssetError::SineTableLength {
                    expected: ANGLE_STEPS,
                    actual: values.len(),
                })?;
        Ok(Self { values })
    }

    #[inline(always)]
    pub fn sin(&self, angle: Angle) -> i32 {
        self.values[angle.index()] as i32
    }

    /// `cos(a) = sin(a + 64)`.
    #[inline(always)]
    pub fn cos(&self, angle: Angle) -> i32 {
        self.sin(angle.offset(Angle::QUARTER.value() as i32))
    }

    /// Unit step vector `(cos, sin)` for `angle`, in 8.8.
    #[inline(always)]
    pub fn step(&self, angle: Angle) -> (Fixed8, Fixed8) {
        (
            Fixed8::from_raw(self.cos(angle)),
            Fixed8::from_raw(self.sin(angle)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SINE_TABLE;

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            SineTable::from_slice(&[0; 10]),
            Err(AssetError::SineTableLength {
                expected: 256,
                actual: 10
            })
        );
    }

    #[test]
    fn cosine_is_quarter_turn_ahead() {
        let t = SineTable::new(SINE_TABLE);
        assert_eq!(t.cos(Angle::ZERO), t.sin(Angle::QUARTER));
        assert_eq!(t.cos(Angle::new(200)), t.sin(Angle::new(8)));
        assert_eq!(t.step(Angle::ZERO), (Fixed8::from_raw(127), Fixed8::ZERO));
    }

    #[test]
    fn standard_table_is_antisymmetric() {
        let t = SineTable::from_slice(&SINE_TABLE).unwrap();
        for a in 0..=255u8 {
            let a = Angle::new(a);
            assert_eq!(t.sin(a), -t.sin(Angle::wrapped(-(a.value() as i32))));
        }
    }
}
