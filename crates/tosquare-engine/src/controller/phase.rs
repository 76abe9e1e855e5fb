/// Direction of the running animation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Native shape → square, drawing image 0.
    #[default]
    ToSquare,
    /// Square → native shape, drawing image 1.
    FromSquare,
}

impl Phase {
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Phase::ToSquare => Phase::FromSquare,
            Phase::FromSquare => Phase::ToSquare,
        }
    }

    /// Image slot drawn during this phase.
    #[inline]
    pub fn image_index(self) -> usize {
        match self {
            Phase::ToSquare => 0,
            Phase::FromSquare => 1,
        }
    }

    /// Whether the clock runs backwards (max → 0) in this phase.
    #[inline]
    pub fn is_reversed(self) -> bool {
        self == Phase::FromSquare
    }
}
