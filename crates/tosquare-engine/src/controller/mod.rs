//! Icon animation controller.
//!
//! Alternates two timed animations forever: image 0 morphs into a square,
//! then image 1 morphs out of it, then back to image 0, and so on.

mod animator;
mod phase;

pub use animator::{AnimationState, AnimatorConfig, IconAnimator};
pub use phase::Phase;
