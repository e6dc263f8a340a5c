//! Terminal host for the raycasting core.
//!
//! The core writes an 8-bit style screen memory; this crate shows that
//! memory in a terminal. It avoids widget toolkits and renders into a plain
//! cell framebuffer that is diffed and flushed through crossterm.
//!
//! - [`screen_view`]: screen memory to braille cells (pure, testable)
//! - [`renderer`]: diffing terminal output
//! - [`config`]: environment configuration

pub mod config;
pub mod fb;
pub mod renderer;
pub mod screen_view;

pub use raymaze_core as core;
pub use raymaze_types as types;

pub use config::TermConfig;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, for_each_changed_run, TerminalRenderer};
pub use screen_view::{Density, HudStatus, ScreenView, Viewport};
