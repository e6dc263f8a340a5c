//! Edge smoothing across neighbouring columns.
//!
//! With only 32 rays, a wall seen at an angle projects as a staircase of
//! equal-height runs. Each pass turns a run followed by a lower column into
//! a linear ramp down to that column. The left-to-right pass starts at the
//! left screen edge and the right-to-left pass at the right one; each stops
//! at the first gap or taller wall, so only the wall touching that edge is
//! smoothed.

/// Smooth `heights` in place: one ascending and one descending pass.
pub fn smooth_edges(heights: &mut [u8]) {
    let n = heights.len();
    if n == 0 {
        return;
    }
    smooth_pass(heights, n, false);
    // The descending pass never visits column 0.
    smooth_pass(heights, n - 1, true);
}

/// One scan over the first `limit` columns, counted from the left edge or,
/// when `reversed`, from the right edge. A zero column or a step up ends
/// the pass. A step down rewrites the chunk as a ramp and anchors the next
/// chunk on the lower column.
fn smooth_pass(heights: &mut [u8], limit: usize, reversed: bool) {
    let n = heights.len();
    let at = |pos: usize| if reversed { n - 1 - pos } else { pos };

    let mut start = 0usize;
    let mut anchor = heights[at(0)];

    for pos in 0..limit {
        let h = heights[at(pos)];
        if h == 0 || h > anchor {
            break;
        }
        if h < anchor {
            let len = pos - start;
            // Zero-length chunk: decrement of 0.
            let step = (anchor - h) as usize / len.max(1);
            for k in 0..len {
                heights[at(start + k)] = (anchor as usize - step * k) as u8;
            }
            start = pos;
            anchor = h;
        }
    }
}
