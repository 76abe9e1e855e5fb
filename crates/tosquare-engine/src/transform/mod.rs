//! Attract-to-square geometry.
//!
//! Pure functions: every vertex of an icon is pulled toward the nearest edge of
//! the icon's bounding square as progress goes from `0` to `max`. Callers
//! transform a clone; source images are never touched here.

mod attract;
mod progress;

pub use attract::{attract_coordinate, attract_image, attract_point, attract_shape};
pub use progress::{ANIMATION_NORMALIZED_MAX, Progress};
