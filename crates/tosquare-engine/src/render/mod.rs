//! Drawing subsystem.
//!
//! Handlers draw through the [`DrawContext`] trait; hosts decide what a draw
//! call means. [`Canvas`] rasterizes into an in-memory 8-bit color buffer.
//!
//! Convention:
//! - coordinates are integer pixels (top-left origin, +Y down)
//! - every call is relative to the current draw box and clipped to it

mod canvas;
mod ctx;

pub use canvas::Canvas;
pub use ctx::DrawContext;
