//! Raycasting core - pure, deterministic, and testable
//!
//! This crate turns a player pose and a tile grid into a frame of display
//! memory. It performs no I/O: the display is reached through the
//! [`DisplaySurface`] trait, and all level data is injected through a
//! [`World`].
//!
//! # Module Structure
//!
//! - [`distance`]: distance-to-height falloff table, built once
//! - [`trig`]: injected 256-entry fixed-point sine table
//! - [`grid`]: tile grid and the 8.8 map sampler
//! - [`tracer`]: one fixed-step ray per screen column
//! - [`smoother`]: two-pass edge smoothing of column heights
//! - [`texture`]: wall texture variants and height buckets
//! - [`buffer`]: offscreen pixel and attribute buffers
//! - [`compositor`]: delta-redraw wall compositing
//! - [`presenter`]: copying buffers to display memory via a row-address table
//! - [`engine`]: per-frame pipeline state
//! - [`motion`]: turning and stepping the player
//! - [`assets`]: built-in trig table, maze and textures
//!
//! # Frame Pipeline
//!
//! Every frame runs strictly in this order, with no overlap between frames:
//!
//! 1. **Trace** all 32 columns against the grid
//! 2. **Smooth** the height row (left-to-right, then right-to-left)
//! 3. **Composite** only the columns whose height changed
//! 4. **Paint** the attribute overlay
//! 5. **Present** pixels and attributes, then reset the attributes
//!
//! # Example
//!
//! ```
//! use raymaze_core::{apply_motion, assets, Engine, ScreenMemory};
//! use raymaze_types::MotionAction;
//!
//! let world = assets::standard_world().unwrap();
//! let mut engine = Engine::new();
//! let mut screen = ScreenMemory::default();
//! let mut pose = assets::START_POSE;
//!
//! apply_motion(&mut pose, MotionAction::TurnRight, &world);
//! let stats = engine.render_frame(&world, &pose, &mut screen);
//! assert_eq!(stats.frame, 1);
//! ```

pub mod assets;
pub mod buffer;
pub mod compositor;
pub mod distance;
pub mod engine;
pub mod error;
pub mod grid;
pub mod motion;
pub mod presenter;
pub mod smoother;
pub mod texture;
pub mod tracer;
pub mod trig;
pub mod world;

pub use raymaze_types as types;

// Re-export commonly used types for convenience
pub use buffer::{AttrBuffer, ByteBuffer, PixelBuffer};
pub use compositor::{draw_wall_strip, Compositor};
pub use distance::DistanceTable;
pub use engine::{Engine, FrameStats};
pub use error::{AssetError, AssetResult};
pub use grid::{Grid, BOUNDARY_TILE};
pub use motion::apply_motion;
pub use presenter::{present, DisplaySurface, RowAddressTable, ScreenMemory};
pub use smoother::smooth_edges;
pub use texture::{TextureBucket, TextureSet, TextureVariant};
pub use tracer::{effective_angle, trace, trace_all, ColumnHeights};
pub use trig::SineTable;
pub use world::World;
