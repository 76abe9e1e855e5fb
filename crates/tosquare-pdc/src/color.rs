/// 8-bit watch color: two bits each of alpha, red, green and blue (`0bAARRGGBB`).
///
/// The display only knows fully opaque and fully clear pixels, so any alpha
/// other than zero is treated as opaque by renderers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color8(pub u8);

impl Color8 {
    pub const CLEAR: Color8 = Color8(0x00);
    pub const BLACK: Color8 = Color8(0xC0);
    pub const WHITE: Color8 = Color8(0xFF);
    pub const RED: Color8 = Color8(0xF0);
    pub const GREEN: Color8 = Color8(0xCC);
    pub const BLUE: Color8 = Color8(0xC3);
    pub const LIGHT_GRAY: Color8 = Color8(0xEA);

    /// Builds a color from 2-bit channels. Values above 3 are masked.
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a & 3) << 6) | ((r & 3) << 4) | ((g & 3) << 2) | (b & 3))
    }

    #[inline]
    pub const fn alpha(self) -> u8 { self.0 >> 6 }
    #[inline]
    pub const fn red(self) -> u8 { (self.0 >> 4) & 3 }
    #[inline]
    pub const fn green(self) -> u8 { (self.0 >> 2) & 3 }
    #[inline]
    pub const fn blue(self) -> u8 { self.0 & 3 }

    #[inline]
    pub const fn is_clear(self) -> bool {
        self.alpha() == 0
    }

    /// Expands to straight-alpha RGBA bytes (each 2-bit channel scaled by 85).
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.red() * 85, self.green() * 85, self.blue() * 85, self.alpha() * 85]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_unpack() {
        let c = Color8::from_argb(3, 2, 1, 0);
        assert_eq!((c.alpha(), c.red(), c.green(), c.blue()), (3, 2, 1, 0));
    }

    #[test]
    fn named_colors() {
        assert_eq!(Color8::RED, Color8::from_argb(3, 3, 0, 0));
        assert_eq!(Color8::WHITE.to_rgba8(), [255, 255, 255, 255]);
        assert!(Color8::CLEAR.is_clear());
        assert!(!Color8::BLACK.is_clear());
    }
}
