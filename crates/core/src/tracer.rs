//! Ray tracer: one ray per screen column.
//!
//! Rays march in fixed unit steps (the trig table's `(cos, sin)`), not from
//! grid line to grid line. Each step subtracts the next distance-table entry
//! from a height accumulator, so by the time the ray hits a solid cell the
//! accumulator already holds the projected height in 8.8.

use crate::distance::DistanceTable;
use crate::types::{Angle, Pose, MAX_PROJECTION_HEIGHT, SCREEN_COLUMNS};
use crate::world::World;

/// Projected half-height for every screen column.
pub type ColumnHeights = [u8; SCREEN_COLUMNS];

/// Ray angle for `column`: `column + heading - SCREEN_COLUMNS / 2`, mod 256.
///
/// Column `SCREEN_COLUMNS / 2` looks straight along the heading.
#[inline(always)]
pub fn effective_angle(column: usize, heading: Angle) -> Angle {
    heading.offset(column as i32 - (SCREEN_COLUMNS / 2) as i32)
}

/// Trace the ray for `column` and return its wall height in pixels.
///
/// Returns 0 when the accumulator runs out before a hit (wall too far to
/// draw). Otherwise `accumulator >> 8`, clamped to [`MAX_PROJECTION_HEIGHT`].
pub fn trace(column: usize, pose: &Pose, world: &World, table: &DistanceTable) -> u8 {
    let angle = effective_angle(column, pose.heading);
    let (dx, dy) = world.trig().step(angle);
    let grid = world.grid();

    let mut x = pose.x;
    let mut y = pose.y;
    let mut acc = table.initial_height();

    for &delta in table.deltas().iter() {
        if grid.is_solid_at(x, y) {
            break;
        }
        if acc < delta {
            return 0;
        }
        acc -= delta;
        x += dx;
        y += dy;
    }

    (acc >> 8).clamp(0, MAX_PROJECTION_HEIGHT as i32) as u8
}

/// Trace every column into `out`.
pub fn trace_all(pose: &Pose, world: &World, table: &DistanceTable, out: &mut ColumnHeights) {
    for (column, height) in out.iter_mut().enumerate() {
        *height = trace(column, pose, world, table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;
    use crate::grid::Grid;
    use crate::types::Fixed8;

    fn open_world(rows: &[&str]) -> World {
        World::new(
            Grid::from_ascii(rows).unwrap(),
            assets::sine_table(),
            assets::standard_textures().unwrap(),
        )
    }

    #[test]
    fn centre_column_looks_along_heading() {
        assert_eq!(effective_angle(SCREEN_COLUMNS / 2, Angle::new(77)), Angle::new(77));
        assert_eq!(effective_angle(0, Angle::new(3)), Angle::new(243));
        assert_eq!(effective_angle(SCREEN_COLUMNS - 1, Angle::new(250)), Angle::new(9));
    }

    #[test]
    fn standing_inside_a_wall_clamps_to_max() {
        let world = open_world(&["###", "###", "###"]);
        let pose = Pose::new(Fixed8::from_cell_center(1), Fixed8::from_cell_center(1), Angle::ZERO);
        let table = DistanceTable::standard();
        assert_eq!(trace(16, &pose, &world, &table), MAX_PROJECTION_HEIGHT);
    }

    #[test]
    fn adjacent_wall_is_tall_and_far_wall_is_short() {
        let row = format!("#{}#", ".".repeat(30));
        let world = open_world(&[&"#".repeat(32), &row, &"#".repeat(32)]);
        let table = DistanceTable::standard();

        let near = Pose::new(Fixed8::from_cell_center(29), Fixed8::from_cell_center(1), Angle::ZERO);
        let far = Pose::new(Fixed8::from_cell_center(20), Fixed8::from_cell_center(1), Angle::ZERO);
        let near_h = trace(16, &near, &world, &table);
        let far_h = trace(16, &far, &world, &table);
        assert!(near_h > far_h, "near={near_h} far={far_h}");
        assert!(far_h > 0);
    }

    #[test]
    fn ray_beyond_view_distance_is_invisible() {
        // 40 cells of corridor: the ray needs ~80 steps to reach the end wall.
        let row = format!("#{}#", ".".repeat(40));
        let world = open_world(&[&"#".repeat(42), &row, &"#".repeat(42)]);
        let pose = Pose::new(Fixed8::from_cell_center(1), Fixed8::from_cell_center(1), Angle::ZERO);
        assert_eq!(trace(16, &pose, &world, &DistanceTable::standard()), 0);
    }
}
