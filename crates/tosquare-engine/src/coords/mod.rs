//! Coordinate and geometry types shared by the transform, surface and renderers.
//!
//! Canonical space:
//! - Integer pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! `Point` and `Size` come from the image format crate so decoded icons and
//! engine geometry share one representation.

mod rect;

pub use rect::Rect;
pub use tosquare_pdc::{Point, Size};
