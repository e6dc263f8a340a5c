//! Raymaze (workspace facade crate).
//!
//! Re-exports the pipeline crates under `raymaze::{core,input,term,types}`
//! so the binaries, integration tests and benches share one import path.

pub use raymaze_core as core;
pub use raymaze_input as input;
pub use raymaze_term as term;
pub use raymaze_types as types;
