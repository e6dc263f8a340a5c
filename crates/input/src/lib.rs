//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::MotionAction`]. Terminals
//! rarely report key releases, so motion is driven by press and repeat
//! events only.

pub mod map;

pub use raymaze_types as types;

pub use map::{handle_key_event, should_quit};
