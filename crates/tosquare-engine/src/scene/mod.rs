//! Recorded draw streams.
//!
//! Responsibilities:
//! - capture the calls a handler makes on a [`DrawContext`](crate::render::DrawContext)
//! - keep them in call order with the draw box that was active for each
//!
//! Used by tests and tools that inspect frames instead of rasterizing them.

mod cmd;
mod list;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
