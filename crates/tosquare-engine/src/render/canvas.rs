use tosquare_pdc::{Color8, CommandKind, DrawCommand, DrawCommandImage};

use crate::coords::{Point, Rect, Size};

use super::DrawContext;

/// Software raster target with one [`Color8`] per pixel.
///
/// Strokes and fills are hard-edged; the antialiasing flag is recorded but
/// does not change output.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: Size,
    pixels: Vec<Color8>,
    draw_box: Rect,
    fill_color: Color8,
    antialiased: bool,
}

impl Canvas {
    /// Clear canvas of `size` pixels; the draw box covers all of it.
    pub fn new(size: Size) -> Self {
        let len = size.w.max(0) as usize * size.h.max(0) as usize;
        Self {
            size,
            pixels: vec![Color8::CLEAR; len],
            draw_box: Rect::from_size(size),
            fill_color: Color8::BLACK,
            antialiased: false,
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn antialiased(&self) -> bool {
        self.antialiased
    }

    /// Pixel at absolute canvas coordinates.
    pub fn pixel(&self, x: i16, y: i16) -> Option<Color8> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Number of pixels holding `color`.
    pub fn count(&self, color: Color8) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Resets every pixel and the draw box.
    pub fn clear(&mut self, color: Color8) {
        self.pixels.fill(color);
        self.draw_box = Rect::from_size(self.size);
    }

    /// Renders `region` (absolute) as text, one char per pixel, rows joined
    /// with `\n`.
    pub fn to_ascii_with(&self, region: Rect, glyph: impl Fn(Color8) -> char) -> String {
        let Some(region) = region.intersect(Rect::from_size(self.size)) else {
            return String::new();
        };
        let max = region.max();
        let mut out = String::with_capacity((region.size.w as usize + 1) * region.size.h as usize);
        for y in region.origin.y..max.y {
            if y > region.origin.y {
                out.push('\n');
            }
            for x in region.origin.x..max.x {
                out.push(self.pixel(x, y).map(&glyph).unwrap_or(' '));
            }
        }
        out
    }

    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.size.w || y >= self.size.h {
            return None;
        }
        Some(y as usize * self.size.w as usize + x as usize)
    }

    // ── primitives (draw-box relative, i32 to avoid overflow at edges) ────

    /// Draw box extent in its own coordinates: valid pixels are `[0, w) x [0, h)`.
    fn extent(&self) -> (i32, i32) {
        (i32::from(self.draw_box.size.w), i32::from(self.draw_box.size.h))
    }

    fn plot(&mut self, x: i32, y: i32, color: Color8) {
        let ax = x + i32::from(self.draw_box.origin.x);
        let ay = y + i32::from(self.draw_box.origin.y);
        let (Ok(ax), Ok(ay)) = (i16::try_from(ax), i16::try_from(ay)) else {
            return;
        };
        if !self.draw_box.contains(Point::new(ax, ay)) {
            return;
        }
        if let Some(i) = self.index(ax, ay) {
            self.pixels[i] = color;
        }
    }

    /// Square brush of `width` pixels centered on (x, y), clipped to the draw box.
    fn stamp(&mut self, x: i32, y: i32, width: u8, color: Color8) {
        let w = i32::from(width.max(1));
        let lo = -(w - 1) / 2;
        let hi = w / 2;
        let (bw, bh) = self.extent();
        for dy in lo.max(-y)..=hi.min(bh - 1 - y) {
            for dx in lo.max(-x)..=hi.min(bw - 1 - x) {
                self.plot(x + dx, y + dy, color);
            }
        }
    }

    /// Bresenham line, both endpoints included.
    fn line(&mut self, a: (i32, i32), b: (i32, i32), width: u8, color: Color8) {
        let (mut x, mut y) = a;
        let dx = (b.0 - x).abs();
        let dy = -(b.1 - y).abs();
        let sx = if x < b.0 { 1 } else { -1 };
        let sy = if y < b.1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.stamp(x, y, width, color);
            if x == b.0 && y == b.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Even-odd scanline fill; rows are half-open `[top, bottom)`.
    ///
    /// Only rows and columns inside the draw box are visited.
    fn fill_polygon(&mut self, points: &[(i32, i32)], color: Color8) {
        if points.len() < 3 {
            return;
        }
        let (w, h) = self.extent();
        let top = points.iter().map(|p| p.1).min().unwrap_or(0).max(0);
        let bottom = points.iter().map(|p| p.1).max().unwrap_or(0).min(h);

        let mut crossings = Vec::with_capacity(points.len());
        for y in top..bottom {
            crossings.clear();
            for (i, &(x0, y0)) in points.iter().enumerate() {
                let (x1, y1) = points[(i + 1) % points.len()];
                if y0 == y1 || y < y0.min(y1) || y >= y0.max(y1) {
                    continue;
                }
                let dx = i64::from(y - y0) * i64::from(x1 - x0) / i64::from(y1 - y0);
                crossings.push(i64::from(x0) + dx);
            }
            crossings.sort_unstable();
            for span in crossings.chunks_exact(2) {
                let from = span[0].clamp(0, i64::from(w)) as i32;
                let to = span[1].clamp(0, i64::from(w)) as i32;
                for x in from..to {
                    self.plot(x, y, color);
                }
            }
        }
    }

    /// Scans the circle's bounding square clipped to the draw box. Distances
    /// are squared in `i64`; radii go up to `u16::MAX`.
    fn circle(&mut self, center: (i32, i32), radius: u16, command: &DrawCommand) {
        let r = i64::from(radius);
        let w = i64::from(command.stroke_width);
        let stroke = !command.stroke_color.is_clear() && w > 0;
        let fill = !command.fill_color.is_clear();
        let reach = i32::from(radius) + i32::from(command.stroke_width);
        let outer = (2 * r + w).pow(2);
        let inner = (2 * r - w).max(0).pow(2);

        let (bw, bh) = self.extent();
        let (cx, cy) = center;
        let dys = (-reach).max(-cy)..=reach.min(bh - 1 - cy);
        let dxs = (-reach).max(-cx)..=reach.min(bw - 1 - cx);

        for dy in dys {
            for dx in dxs.clone() {
                let d2 = i64::from(dx).pow(2) + i64::from(dy).pow(2);
                let (x, y) = (cx + dx, cy + dy);
                if fill && d2 <= r * r {
                    self.plot(x, y, command.fill_color);
                }
                if stroke && 4 * d2 <= outer && 4 * d2 >= inner {
                    self.plot(x, y, command.stroke_color);
                }
            }
        }
    }

    fn draw_command(&mut self, command: &DrawCommand, offset: Point) {
        let to_pixels = |p: &Point| {
            let (x, y) = match command.kind {
                // 13.3 fixed point
                CommandKind::PrecisePath => (p.x >> 3, p.y >> 3),
                CommandKind::Path | CommandKind::Circle => (p.x, p.y),
            };
            (i32::from(x) + i32::from(offset.x), i32::from(y) + i32::from(offset.y))
        };
        let points: Vec<(i32, i32)> = command.points.iter().map(to_pixels).collect();

        match command.kind {
            CommandKind::Circle => {
                if let Some(&center) = points.first() {
                    self.circle(center, command.radius, command);
                }
            }
            CommandKind::Path | CommandKind::PrecisePath => {
                if !command.fill_color.is_clear() {
                    self.fill_polygon(&points, command.fill_color);
                }
                if command.stroke_color.is_clear() || command.stroke_width == 0 {
                    return;
                }
                for pair in points.windows(2) {
                    self.line(pair[0], pair[1], command.stroke_width, command.stroke_color);
                }
                if !command.path_open && points.len() > 2 {
                    self.line(points[points.len() - 1], points[0], command.stroke_width, command.stroke_color);
                }
                if points.len() == 1 {
                    self.stamp(points[0].0, points[0].1, command.stroke_width, command.stroke_color);
                }
            }
        }
    }
}

impl DrawContext for Canvas {
    fn set_draw_box(&mut self, rect: Rect) {
        self.draw_box = rect.intersect(Rect::from_size(self.size)).unwrap_or_default();
    }

    fn set_antialiased(&mut self, enabled: bool) {
        self.antialiased = enabled;
    }

    fn set_fill_color(&mut self, color: Color8) {
        self.fill_color = color;
    }

    fn fill_rect(&mut self, rect: Rect) {
        let Some(rect) = rect.intersect(Rect::from_size(self.draw_box.size)) else {
            return;
        };
        let max = rect.max();
        for y in rect.origin.y..max.y {
            for x in rect.origin.x..max.x {
                self.plot(i32::from(x), i32::from(y), self.fill_color);
            }
        }
    }

    fn draw_image(&mut self, image: &DrawCommandImage, offset: Point) {
        for command in image.commands().iter().filter(|c| !c.hidden) {
            self.draw_command(command, offset);
        }
    }
}
