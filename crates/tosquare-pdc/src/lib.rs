//! Reader, writer, and value types for **PDC** vector images (Pebble Draw
//! Commands), the watch platform's scalable icon format.
//!
//! This crate is intentionally dependency-free so it can be consumed by
//! asset tooling and tests without pulling in any animation or render code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`geometry`] | `Point`, `Size` |
//! | [`color`] | `Color8` |
//! | [`command`] | `DrawCommand`, `CommandKind` |
//! | [`image`] | `DrawCommandImage` |
//! | [`error`] | `PdcError` |
//! | [`parser`] | `parse_image`, `read_image` entry points |
//! | [`writer`] | `image_to_bytes`, `write_image` |
//!
//! # Quick start
//!
//! ```rust
//! use tosquare_pdc::{parse_image, image_to_bytes, DrawCommand, DrawCommandImage, Point, Size};
//!
//! let image = DrawCommandImage::new(
//!     Size::new(10, 10),
//!     vec![DrawCommand::path(vec![Point::new(1, 1), Point::new(8, 1), Point::new(8, 8)])],
//! );
//! let bytes = image_to_bytes(&image).unwrap();
//! assert_eq!(parse_image(&bytes).unwrap(), image);
//! ```

pub mod color;
pub mod command;
pub mod error;
pub mod geometry;
pub mod image;
pub mod parser;
pub mod writer;

pub use color::Color8;
pub use command::{CommandKind, DrawCommand};
pub use error::PdcError;
pub use geometry::{Point, Size};
pub use image::DrawCommandImage;
pub use parser::{parse_image, read_image};
pub use writer::{image_to_bytes, write_image};
