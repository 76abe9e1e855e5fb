use tosquare_pdc::{Color8, DrawCommandImage};

use crate::coords::{Point, Rect};

/// A recorded draw call.
///
/// Images are stored by value: the recording owns a copy, so a handler may
/// drop its per-frame image right after drawing it.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect { rect: Rect, color: Color8 },
    Image { image: DrawCommandImage, offset: Point, antialiased: bool },
}
