//! tosquare engine crate.
//!
//! Morphs a vector icon into its bounding square and back, forever. This
//! crate owns the transform, the animation clock and controller, and a small
//! reference host (surface, run loop, renderers) used by tools and tests.
//!
//! ```rust
//! use tosquare_engine::controller::{AnimatorConfig, IconAnimator};
//! use tosquare_engine::coords::{Point, Size};
//! use tosquare_engine::render::Canvas;
//! use tosquare_engine::runtime::{RunLoop, SurfaceConfig};
//! use tosquare_engine::pdc::{DrawCommand, DrawCommandImage};
//! use std::time::Duration;
//!
//! let icon = DrawCommandImage::new(Size::new(50, 50), vec![DrawCommand::path(vec![Point::new(10, 10)])]);
//! let animator = IconAnimator::new([Some(icon.clone()), Some(icon)], AnimatorConfig::default());
//! let mut run_loop = RunLoop::new(SurfaceConfig::default(), animator);
//! let mut canvas = Canvas::new(Size::new(144, 168));
//!
//! run_loop.load();
//! assert!(run_loop.step(Duration::from_millis(33), &mut canvas));
//! run_loop.unload();
//! ```

pub mod animation;
pub mod assets;
pub mod controller;
pub mod coords;
pub mod core;
pub mod runtime;
pub mod time;
pub mod transform;

pub mod logging;
pub mod render;
pub mod scene;

pub use tosquare_pdc as pdc;
