//! Player motion: turning and stepping along the heading.

use crate::types::{MotionAction, Pose, TURN_STEP};
use crate::world::World;

/// Apply `action` to `pose`.
///
/// Turns always succeed. A step whose destination is a solid cell is
/// rejected and leaves the pose unchanged. Returns whether the pose moved.
pub fn apply_motion(pose: &mut Pose, action: MotionAction, world: &World) -> bool {
    match action {
        MotionAction::TurnLeft => {
            pose.heading = pose.heading.offset(-(TURN_STEP as i32));
            true
        }
        MotionAction::TurnRight => {
            pose.heading = pose.heading.offset(TURN_STEP as i32);
            true
        }
        MotionAction::Forward | MotionAction::Backward => {
            let (mut dx, mut dy) = world.trig().step(pose.heading);
            if action == MotionAction::Backward {
                dx = -dx;
                dy = -dy;
            }
            let (nx, ny) = (pose.x + dx, pose.y + dy);
            if world.grid().is_solid_at(nx, ny) {
                tracing::trace!(x = nx.raw(), y = ny.raw(), "step blocked");
                return false;
            }
            pose.x = nx;
            pose.y = ny;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;
    use crate::grid::Grid;
    use crate::types::{Angle, Fixed8};

    fn corridor() -> World {
        World::new(
            Grid::from_ascii(&["#####", "#...#", "#####"]).unwrap(),
            assets::sine_table(),
            assets::standard_textures().unwrap(),
        )
    }

    #[test]
    fn turning_wraps_heading() {
        let world = corridor();
        let mut pose = Pose::new(Fixed8::from_cell_center(2), Fixed8::from_cell_center(1), Angle::new(1));
        assert!(apply_motion(&mut pose, MotionAction::TurnLeft, &world));
        assert_eq!(pose.heading, Angle::new(255));
        assert!(apply_motion(&mut pose, MotionAction::TurnRight, &world));
        assert_eq!(pose.heading, Angle::new(1));
    }

    #[test]
    fn forward_then_backward_returns_home() {
        let world = corridor();
        let start = Pose::new(Fixed8::from_cell_center(2), Fixed8::from_cell_center(1), Angle::ZERO);
        let mut pose = start;
        assert!(apply_motion(&mut pose, MotionAction::Forward, &world));
        assert_eq!(pose.x, start.x + Fixed8::from_raw(127));
        assert!(apply_motion(&mut pose, MotionAction::Backward, &world));
        assert_eq!(pose, start);
    }

    #[test]
    fn walls_block_steps() {
        let world = corridor();
        let mut pose = Pose::new(Fixed8::from_raw(3 * 256 + 200), Fixed8::from_cell_center(1), Angle::ZERO);
        let before = pose;
        assert!(!apply_motion(&mut pose, MotionAction::Forward, &world));
        assert_eq!(pose, before);
    }
}
