//! Per-frame pipeline: trace, smooth, composite, present.
//!
//! [`Engine`] holds all mutable render state. The caller owns it along with
//! the [`World`] and passes both in each frame; there is no global state.
//!
//! # Example
//!
//! ```
//! use raymaze_core::{assets, Engine, ScreenMemory};
//!
//! let world = assets::standard_world().unwrap();
//! let mut engine = Engine::new();
//! let mut screen = ScreenMemory::default();
//!
//! let first = engine.render_frame(&world, &assets::START_POSE, &mut screen);
//! let second = engine.render_frame(&world, &assets::START_POSE, &mut screen);
//! assert!(first.dirty_columns > 0);
//! assert_eq!(second.dirty_columns, 0);
//! ```

use crate::compositor::Compositor;
use crate::distance::DistanceTable;
use crate::presenter::{present, DisplaySurface};
use crate::smoother::smooth_edges;
use crate::tracer::{trace_all, ColumnHeights};
use crate::types::{Pose, SCREEN_COLUMNS};
use crate::world::World;

/// What one frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Frame counter, starting at 1.
    pub frame: u64,
    /// Columns whose height changed and were redrawn.
    pub dirty_columns: usize,
    /// Columns showing any wall.
    pub visible_columns: usize,
}

#[derive(Debug, Clone)]
pub struct Engine {
    distances: DistanceTable,
    heights: ColumnHeights,
    compositor: Compositor,
    frames: u64,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_distance_table(DistanceTable::standard())
    }

    pub fn with_distance_table(distances: DistanceTable) -> Self {
        Self {
            distances,
            heights: [0; SCREEN_COLUMNS],
            compositor: Compositor::new(),
            frames: 0,
        }
    }

    /// Trace and smooth every column for `pose` without drawing.
    pub fn compute_heights(&mut self, world: &World, pose: &Pose) -> &ColumnHeights {
        trace_all(pose, world, &self.distances, &mut self.heights);
        smooth_edges(&mut self.heights);
        &self.heights
    }

    /// Run one whole frame and present it to `surface`.
    pub fn render_frame<D: DisplaySurface + ?Sized>(
        &mut self,
        world: &World,
        pose: &Pose,
        surface: &mut D,
    ) -> FrameStats {
        self.compute_heights(world, pose);

        let textures = world.textures();
        let dirty_columns = self.compositor.composite_frame(textures, &self.heights);
        self.compositor.paint_attributes(textures, &self.heights);

        let (pixels, attrs) = self.compositor.buffers_mut();
        present(pixels, attrs, surface);

        self.frames += 1;
        let stats = FrameStats {
            frame: self.frames,
            dirty_columns,
            visible_columns: self.heights.iter().filter(|&&h| h > 0).count(),
        };
        tracing::trace!(
            frame = stats.frame,
            dirty = stats.dirty_columns,
            visible = stats.visible_columns,
            "frame presented"
        );
        stats
    }

    /// Heights of the most recent frame, after smoothing.
    pub fn heights(&self) -> &ColumnHeights {
        &self.heights
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;
    use crate::presenter::ScreenMemory;
    use crate::types::{Angle, MAX_PROJECTION_HEIGHT};

    #[test]
    fn turning_redraws_only_changed_columns() {
        let world = assets::standard_world().unwrap();
        let mut engine = Engine::new();
        let mut screen = ScreenMemory::default();

        let mut pose = assets::START_POSE;
        engine.render_frame(&world, &pose, &mut screen);
        let before = *engine.heights();

        pose.heading = pose.heading.offset(2);
        let stats = engine.render_frame(&world, &pose, &mut screen);
        let changed = before
            .iter()
            .zip(engine.heights().iter())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(stats.dirty_columns, changed);
        assert_eq!(stats.frame, 2);
    }

    #[test]
    fn heights_never_exceed_projection_limit() {
        let world = assets::standard_world().unwrap();
        let mut engine = Engine::new();
        let mut pose = assets::START_POSE;
        for heading in (0..=255u8).step_by(7) {
            pose.heading = Angle::new(heading);
            let heights = engine.compute_heights(&world, &pose);
            assert!(heights.iter().all(|&h| h <= MAX_PROJECTION_HEIGHT));
        }
    }

    #[test]
    fn presented_screen_matches_offscreen_buffer() {
        let world = assets::standard_world().unwrap();
        let mut engine = Engine::new();
        let mut screen = ScreenMemory::default();
        engine.render_frame(&world, &assets::START_POSE, &mut screen);

        let pixels = engine.compositor().pixels();
        for row in 0..pixels.height() {
            for column in 0..pixels.width() {
                assert_eq!(screen.pixel_byte(row, column), pixels.get(row, column));
            }
        }
    }
}
