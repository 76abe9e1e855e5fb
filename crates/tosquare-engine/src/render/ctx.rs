use tosquare_pdc::{Color8, DrawCommandImage};

use crate::coords::{Point, Rect};

/// Graphics context handed to draw callbacks.
pub trait DrawContext {
    /// Sets the layer area subsequent calls are relative to and clipped by.
    fn set_draw_box(&mut self, rect: Rect);

    fn set_antialiased(&mut self, enabled: bool);

    fn set_fill_color(&mut self, color: Color8);

    /// Fills `rect` (draw-box relative) with the current fill color.
    fn fill_rect(&mut self, rect: Rect);

    /// Draws every visible command of `image` with its top-left at `offset`.
    fn draw_image(&mut self, image: &DrawCommandImage, offset: Point);
}
