//! Reference host: display surface and run loop.
//!
//! Mirrors the watch platform's single-threaded event loop closely enough to
//! drive an [`AnimationHandler`](crate::core::AnimationHandler) end to end.

mod run_loop;
mod surface;

pub use run_loop::{LoopState, RunLoop};
pub use surface::{Layer, Surface, SurfaceConfig};
