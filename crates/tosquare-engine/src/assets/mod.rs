//! Image loading.
//!
//! Providers hand out decoded images by identifier. A failed load is logged
//! and reported as `None`; callers treat that slot as permanently empty.

mod provider;

pub use provider::{FileImageProvider, ImageProvider, StaticImageProvider};
