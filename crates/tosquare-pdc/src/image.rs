use crate::command::DrawCommand;
use crate::geometry::Size;

/// Current (and only) PDC image format version.
pub const PDC_VERSION: u8 = 1;

/// A vector image: a view box and an ordered list of draw commands.
///
/// `Clone` is a deep copy of every command and point, so a clone can be
/// mutated freely without touching the source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCommandImage {
    view_box: Size,
    commands: Vec<DrawCommand>,
}

impl DrawCommandImage {
    pub fn new(view_box: Size, commands: Vec<DrawCommand>) -> Self {
        Self { view_box, commands }
    }

    /// Bounding size of the image.
    #[inline]
    pub fn bounds_size(&self) -> Size {
        self.view_box
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Mutable access to the command list. Commands may be edited in place but
    /// not added or removed.
    #[inline]
    pub fn commands_mut(&mut self) -> &mut [DrawCommand] {
        &mut self.commands
    }

    /// Total number of points across all commands.
    pub fn num_points(&self) -> usize {
        self.commands.iter().map(DrawCommand::num_points).sum()
    }
}
