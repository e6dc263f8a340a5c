//! Distance-to-height falloff table.
//!
//! Entry `i` is how much the ray's height accumulator drops on its `i`-th
//! step. Subtracting the entries in order from [`INIT_WALL_HEIGHT`] walks the
//! accumulator through `H0 / i`, so projected height is inversely
//! proportional to distance without a division in the hot loop.

use crate::types::{DISTANCE_SENTINEL, INIT_WALL_HEIGHT, MAX_DISTANCE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    deltas: [i32; MAX_DISTANCE],
    initial_height: i32,
}

impl DistanceTable {
    /// Table for [`MAX_DISTANCE`] steps starting at [`INIT_WALL_HEIGHT`].
    pub fn standard() -> Self {
        Self::new(INIT_WALL_HEIGHT)
    }

    /// Build the table for an initial 8.8 height `h0`.
    ///
    /// `delta[0]` is 0, `delta[i] = h(i-1) - h(i)` with `h(0) = h0` and
    /// `h(i) = h0 / i`, and the last entry is [`DISTANCE_SENTINEL`].
    pub fn new(h0: i32) -> Self {
        let mut deltas = [0i32; MAX_DISTANCE];
        let mut previous = h0;
        for (i, delta) in deltas
            .iter_mut()
            .enumerate()
            .take(MAX_DISTANCE - 1)
            .skip(1)
        {
            let height = h0 / i as i32;
            *delta = previous - height;
            previous = height;
        }
        deltas[MAX_DISTANCE - 1] = DISTANCE_SENTINEL;

        tracing::debug!(h0, steps = MAX_DISTANCE, "distance table built");
        Self {
            deltas,
            initial_height: h0,
        }
    }

    #[inline(always)]
    pub fn initial_height(&self) -> i32 {
        self.initial_height
    }

    #[inline(always)]
    pub fn deltas(&self) -> &[i32; MAX_DISTANCE] {
        &self.deltas
    }

    #[inline(always)]
    pub fn delta(&self, step: usize) -> i32 {
        self.deltas[step]
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Accumulator value after `steps` subtractions (sentinel excluded).
    pub fn height_after(&self, steps: usize) -> i32 {
        let steps = steps.min(MAX_DISTANCE - 1);
        self.initial_height - self.deltas[..steps].iter().sum::<i32>()
    }
}

impl Default for DistanceTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entry_is_zero_and_last_is_sentinel() {
        let t = DistanceTable::standard();
        assert_eq!(t.delta(0), 0);
        assert_eq!(t.delta(MAX_DISTANCE - 1), DISTANCE_SENTINEL);
    }

    #[test]
    fn second_entry_is_zero_because_h_over_one_is_h() {
        let t = DistanceTable::standard();
        assert_eq!(t.delta(1), 0);
        assert_eq!(t.delta(2), INIT_WALL_HEIGHT - INIT_WALL_HEIGHT / 2);
    }

    #[test]
    fn accumulator_telescopes_to_inverse_distance() {
        let t = DistanceTable::standard();
        for steps in 2..MAX_DISTANCE - 1 {
            assert_eq!(t.height_after(steps), INIT_WALL_HEIGHT / (steps as i32 - 1));
        }
    }

    #[test]
    fn small_initial_height_still_non_negative() {
        let t = DistanceTable::new(256);
        assert!(t.deltas().iter().all(|&d| d >= 0));
        assert_eq!(t.height_after(MAX_DISTANCE - 1), 256 / (MAX_DISTANCE as i32 - 2));
    }
}
