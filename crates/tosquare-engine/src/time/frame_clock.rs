use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, after clamping.
    pub dt: Duration,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

#[derive(Debug, Copy, Clone)]
enum Source {
    /// Wall clock, clamped to `[min, max]`.
    Wall { min: Duration, max: Duration },
    /// Every tick reports the same step. Deterministic; used for simulation.
    Fixed(Duration),
}

/// Frame clock producing the deltas fed to [`RunLoop::step`](crate::runtime::RunLoop::step).
///
/// Wall-clock deltas are clamped so a stalled host (debugger, suspended
/// process) does not skip a whole animation in one frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    source: Source,
}

impl FrameClock {
    /// Wall-clock source with default clamps (1 ms .. 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_millis(1), Duration::from_millis(250))
    }

    /// Wall-clock source with custom delta clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            source: Source::Wall { min: dt_min, max: dt_max },
        }
    }

    /// Source that reports `step` on every tick regardless of real time.
    pub fn fixed(step: Duration) -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            source: Source::Fixed(step),
        }
    }

    /// Resets the wall-clock baseline.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = match self.source {
            Source::Wall { min, max } => now.saturating_duration_since(self.last).clamp(min, max),
            Source::Fixed(step) => step,
        };
        self.last = now;

        let ft = FrameTime { dt, now, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
