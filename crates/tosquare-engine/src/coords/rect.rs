use super::{Point, Size};

/// Axis-aligned integer rectangle (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: i16, y: i16, w: i16, h: i16) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    /// Rectangle at the origin covering `size`.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self { origin: Point::zero(), size }
    }

    #[inline]
    pub fn min(self) -> Point {
        self.origin
    }

    /// Exclusive bottom-right corner.
    #[inline]
    pub fn max(self) -> Point {
        Point::new(
            self.origin.x.saturating_add(self.size.w),
            self.origin.y.saturating_add(self.size.h),
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.is_empty()
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let (a0, a1) = (self.min(), self.max());
        let (b0, b1) = (other.min(), other.max());

        let x0 = a0.x.max(b0.x);
        let y0 = a0.y.max(b0.y);
        let x1 = a1.x.min(b1.x);
        let y1 = a1.y.min(b1.y);

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        }
    }
}
