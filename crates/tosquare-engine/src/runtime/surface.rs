use tosquare_pdc::Color8;

use crate::coords::{Rect, Size};

/// Display surface configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceConfig {
    /// Screen size in pixels.
    pub screen: Size,
    /// Frame of the icon layer, in screen coordinates.
    pub icon_frame: Rect,
    pub background: Color8,
}

impl SurfaceConfig {
    pub fn screen(mut self, v: Size) -> Self { self.screen = v; self }
    pub fn icon_frame(mut self, v: Rect) -> Self { self.icon_frame = v; self }
    pub fn background(mut self, v: Color8) -> Self { self.background = v; self }
}

impl Default for SurfaceConfig {
    /// Rectangular watch screen with a 50x50 icon at (50, 50) on red.
    fn default() -> Self {
        Self {
            screen: Size::new(144, 168),
            icon_frame: Rect::new(50, 50, 50, 50),
            background: Color8::RED,
        }
    }
}

/// A rectangular region of the screen with its own dirty flag.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Layer {
    frame: Rect,
    dirty: bool,
}

impl Layer {
    pub fn new(frame: Rect) -> Self {
        Self { frame, dirty: false }
    }

    #[inline]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns and clears the dirty flag.
    #[inline]
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

/// Screen made of a full-screen background layer and the icon layer above it.
#[derive(Debug, Clone)]
pub struct Surface {
    config: SurfaceConfig,
    background: Layer,
    icon: Layer,
}

impl Surface {
    pub fn new(config: SurfaceConfig) -> Self {
        Self {
            background: Layer::new(Rect::from_size(config.screen)),
            icon: Layer::new(config.icon_frame),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    #[inline]
    pub fn background(&self) -> &Layer {
        &self.background
    }

    #[inline]
    pub fn icon(&self) -> &Layer {
        &self.icon
    }

    #[inline]
    pub fn icon_mut(&mut self) -> &mut Layer {
        &mut self.icon
    }

    pub fn mark_all_dirty(&mut self) {
        self.background.mark_dirty();
        self.icon.mark_dirty();
    }

    /// Clears every dirty flag; returns whether any was set.
    pub fn take_dirty(&mut self) -> bool {
        let background = self.background.take_dirty();
        let icon = self.icon.take_dirty();
        background || icon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let surface = Surface::new(SurfaceConfig::default());
        assert_eq!(surface.background().frame(), Rect::new(0, 0, 144, 168));
        assert_eq!(surface.icon().frame(), Rect::new(50, 50, 50, 50));
        assert!(!surface.icon().is_dirty());
    }

    #[test]
    fn take_dirty_clears_every_layer() {
        let mut surface = Surface::new(SurfaceConfig::default());
        surface.icon_mut().mark_dirty();
        assert!(surface.take_dirty());
        assert!(!surface.take_dirty());

        surface.mark_all_dirty();
        assert!(surface.take_dirty());
        assert!(!surface.background().is_dirty());
    }
}
