use crate::transform::Progress;

/// Pacing curve applied to the linear time fraction.
///
/// All curves are integer quadratics on the progress scale: exact at both
/// ends and monotonic in between.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum AnimationCurve {
    Linear,
    /// Slow start, accelerate.
    EaseIn,
    /// Fast start, decelerate.
    EaseOut,
    /// Slow at both ends. Platform default.
    #[default]
    EaseInOut,
}

impl AnimationCurve {
    /// Maps a linear fraction to a paced one on the same scale.
    pub fn apply(self, t: Progress) -> Progress {
        let max = u64::from(t.max());
        let v = u64::from(t.value());
        let rest = max - v;

        let paced = match self {
            AnimationCurve::Linear => v,
            AnimationCurve::EaseIn => v * v / max,
            AnimationCurve::EaseOut => max - rest * rest / max,
            AnimationCurve::EaseInOut => {
                if v < max / 2 {
                    2 * v * v / max
                } else {
                    max - 2 * rest * rest / max
                }
            }
        };
        // paced <= max, so the narrowing is lossless.
        Progress::with_max(paced as u32, t.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::ANIMATION_NORMALIZED_MAX;

    const ALL: [AnimationCurve; 4] = [
        AnimationCurve::Linear,
        AnimationCurve::EaseIn,
        AnimationCurve::EaseOut,
        AnimationCurve::EaseInOut,
    ];

    #[test]
    fn endpoints_are_exact() {
        for curve in ALL {
            assert_eq!(curve.apply(Progress::START), Progress::START, "{curve:?}");
            assert_eq!(curve.apply(Progress::END), Progress::END, "{curve:?}");
        }
    }

    #[test]
    fn monotonic() {
        for curve in ALL {
            let mut prev = 0;
            for v in (0..=ANIMATION_NORMALIZED_MAX).step_by(97).chain([ANIMATION_NORMALIZED_MAX]) {
                let cur = curve.apply(Progress::new(v)).value();
                assert!(cur >= prev, "{curve:?} at {v}");
                prev = cur;
            }
        }
    }

    #[test]
    fn ease_in_out_is_slow_at_the_ends() {
        let quarter = AnimationCurve::EaseInOut.apply(Progress::with_max(250, 1000)).value();
        let three_quarters = AnimationCurve::EaseInOut.apply(Progress::with_max(750, 1000)).value();
        assert_eq!(quarter, 125);
        assert_eq!(three_quarters, 875);
    }

    #[test]
    fn ease_in_lags_linear() {
        assert!(AnimationCurve::EaseIn.apply(Progress::with_max(500, 1000)).value() < 500);
        assert!(AnimationCurve::EaseOut.apply(Progress::with_max(500, 1000)).value() > 500);
    }
}
