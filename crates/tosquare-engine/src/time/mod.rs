//! Time subsystem.
//!
//! Produces frame deltas for a run loop without coupling to any platform.
//! Intended usage:
//! - one `FrameClock` per run loop
//! - call `tick()` once per frame and pass `dt` to `RunLoop::step`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
