use tosquare_pdc::{Color8, DrawCommandImage};

use crate::coords::{Point, Rect};
use crate::render::DrawContext;

use super::DrawCmd;

/// A single draw item: command + the draw box it was issued in.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    pub draw_box: Rect,
}

/// Recorded draw stream for one or more frames.
///
/// State calls (`set_draw_box`, `set_fill_color`, `set_antialiased`) are not
/// recorded themselves; they are folded into the items that follow them.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    draw_box: Rect,
    fill_color: Color8,
    antialiased: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and state. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.draw_box = Rect::default();
        self.fill_color = Color8::default();
        self.antialiased = false;
    }

    /// Returns items in call order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Recorded images with their draw boxes, in call order.
    pub fn images(&self) -> impl Iterator<Item = (&DrawCommandImage, Rect)> {
        self.items.iter().filter_map(|item| match &item.cmd {
            DrawCmd::Image { image, .. } => Some((image, item.draw_box)),
            DrawCmd::FillRect { .. } => None,
        })
    }

    #[inline]
    fn push(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem { cmd, draw_box: self.draw_box });
    }
}

impl DrawContext for DrawList {
    fn set_draw_box(&mut self, rect: Rect) {
        self.draw_box = rect;
    }

    fn set_antialiased(&mut self, enabled: bool) {
        self.antialiased = enabled;
    }

    fn set_fill_color(&mut self, color: Color8) {
        self.fill_color = color;
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.push(DrawCmd::FillRect { rect, color: self.fill_color });
    }

    fn draw_image(&mut self, image: &DrawCommandImage, offset: Point) {
        self.push(DrawCmd::Image {
            image: image.clone(),
            offset,
            antialiased: self.antialiased,
        });
    }
}
