//! Animation clock and pacing curves.
//!
//! The clock runs at most one timed animation. Each `advance` yields a tick
//! with the curved progress and, once the duration has elapsed, a finished
//! notification. Hosts feed it frame deltas; tests feed it fixed steps.

mod clock;
mod curve;

pub use clock::{AnimationClock, AnimationSpec, ClockEvent};
pub use curve::AnimationCurve;
