use crate::color::Color8;
use crate::geometry::Point;

/// Draw command type as stored in the file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Polyline/polygon with whole-pixel points.
    Path,
    /// Circle around a single center point.
    Circle,
    /// Path whose points are 13.3 fixed point (sub-pixel precision).
    PrecisePath,
}

impl CommandKind {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            1 => Some(CommandKind::Path),
            2 => Some(CommandKind::Circle),
            3 => Some(CommandKind::PrecisePath),
            _ => None,
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            CommandKind::Path => 1,
            CommandKind::Circle => 2,
            CommandKind::PrecisePath => 3,
        }
    }
}

/// A single sub-path of a vector image.
///
/// Points are stored exactly as encoded; for [`CommandKind::PrecisePath`]
/// they are in eighths of a pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCommand {
    pub kind: CommandKind,
    pub hidden: bool,
    pub stroke_color: Color8,
    pub stroke_width: u8,
    pub fill_color: Color8,
    /// Path: whether the last point connects back to the first (`false` = closed).
    pub path_open: bool,
    /// Circle radius in pixels. Zero for paths.
    pub radius: u16,
    pub points: Vec<Point>,
}

impl DrawCommand {
    /// Closed path with a 1px black stroke and no fill.
    pub fn path(points: Vec<Point>) -> Self {
        Self {
            kind: CommandKind::Path,
            hidden: false,
            stroke_color: Color8::BLACK,
            stroke_width: 1,
            fill_color: Color8::CLEAR,
            path_open: false,
            radius: 0,
            points,
        }
    }

    pub fn circle(center: Point, radius: u16) -> Self {
        Self {
            kind: CommandKind::Circle,
            radius,
            points: vec![center],
            ..Self::path(Vec::new())
        }
    }

    pub fn open(mut self, v: bool) -> Self { self.path_open = v; self }
    pub fn hidden(mut self, v: bool) -> Self { self.hidden = v; self }
    pub fn stroke(mut self, color: Color8, width: u8) -> Self {
        self.stroke_color = color;
        self.stroke_width = width;
        self
    }
    pub fn fill(mut self, color: Color8) -> Self { self.fill_color = color; self }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Replaces point `index`. Out-of-range indices are ignored.
    #[inline]
    pub fn set_point(&mut self, index: usize, point: Point) {
        if let Some(p) = self.points.get_mut(index) {
            *p = point;
        }
    }
}
