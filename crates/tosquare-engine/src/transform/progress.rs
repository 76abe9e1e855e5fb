/// Normalized end value used by the platform animation clock.
pub const ANIMATION_NORMALIZED_MAX: u32 = 65535;

/// Animation completion as an integer fraction `value / max`.
///
/// `value` is always within `0..=max` and `max` is at least 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Progress {
    value: u32,
    max: u32,
}

impl Progress {
    pub const START: Progress = Progress { value: 0, max: ANIMATION_NORMALIZED_MAX };
    pub const END: Progress = Progress { value: ANIMATION_NORMALIZED_MAX, max: ANIMATION_NORMALIZED_MAX };

    /// Progress on the platform scale. Values above the max are clamped.
    #[inline]
    pub fn new(value: u32) -> Self {
        Self::with_max(value, ANIMATION_NORMALIZED_MAX)
    }

    /// Progress on a custom scale. A zero `max` is treated as 1.
    #[inline]
    pub fn with_max(value: u32, max: u32) -> Self {
        let max = max.max(1);
        Self { value: value.min(max), max }
    }

    #[inline]
    pub fn value(self) -> u32 { self.value }

    #[inline]
    pub fn max(self) -> u32 { self.max }

    #[inline]
    pub fn is_start(self) -> bool { self.value == 0 }

    #[inline]
    pub fn is_end(self) -> bool { self.value == self.max }

    /// Mirror image on the same scale (`max - value`).
    #[inline]
    pub fn reversed(self) -> Self {
        Self { value: self.max - self.value, max: self.max }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::START
    }
}
