use std::time::Duration;

use crate::transform::{ANIMATION_NORMALIZED_MAX, Progress};

use super::AnimationCurve;

/// Configuration of one timed animation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub curve: AnimationCurve,
    /// Play from `max` down to `0` instead of `0` up to `max`.
    pub reverse: bool,
}

impl AnimationSpec {
    pub fn new(duration: Duration) -> Self {
        Self { duration, ..Self::default() }
    }

    pub fn curve(mut self, v: AnimationCurve) -> Self { self.curve = v; self }
    pub fn reverse(mut self, v: bool) -> Self { self.reverse = v; self }
}

impl Default for AnimationSpec {
    /// Platform defaults: 250 ms, ease-in-out, forward.
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(250),
            curve: AnimationCurve::EaseInOut,
            reverse: false,
        }
    }
}

/// Notification produced by [`AnimationClock::advance`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClockEvent {
    /// Interpolated progress for the current frame.
    Tick(Progress),
    /// The animation stopped. `true` if it ran to the end, `false` if it was
    /// replaced or unscheduled.
    Finished(bool),
}

#[derive(Debug, Clone)]
struct Running {
    spec: AnimationSpec,
    elapsed: Duration,
}

/// Single-slot animation clock.
///
/// Events are collected and handed out by `advance`, never delivered from
/// inside `schedule`/`unschedule`, so callers stay in control of ordering.
#[derive(Debug, Default)]
pub struct AnimationClock {
    running: Option<Running>,
    pending: Vec<ClockEvent>,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `spec`. A running animation is stopped with `Finished(false)`.
    pub fn schedule(&mut self, spec: AnimationSpec) {
        if self.running.is_some() {
            log::debug!("animation replaced before finishing");
            self.pending.push(ClockEvent::Finished(false));
        }
        log::debug!(
            "animation scheduled: {:?} {:?}{}",
            spec.duration,
            spec.curve,
            if spec.reverse { " reversed" } else { "" }
        );
        self.running = Some(Running { spec, elapsed: Duration::ZERO });
    }

    /// Stops the running animation, if any, with `Finished(false)`.
    pub fn unschedule(&mut self) {
        if self.running.take().is_some() {
            self.pending.push(ClockEvent::Finished(false));
        }
    }

    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.running.is_some()
    }

    /// Spec of the running animation.
    pub fn current(&self) -> Option<&AnimationSpec> {
        self.running.as_ref().map(|r| &r.spec)
    }

    /// Moves time forward by `dt` and returns the resulting events in order.
    ///
    /// Stop notifications queued by `schedule`/`unschedule` come first. The
    /// last tick of a run is exactly the end value.
    pub fn advance(&mut self, dt: Duration) -> Vec<ClockEvent> {
        let mut events = std::mem::take(&mut self.pending);

        let Some(run) = self.running.as_mut() else {
            return events;
        };

        run.elapsed = run.elapsed.saturating_add(dt).min(run.spec.duration);
        let done = run.elapsed >= run.spec.duration;

        let linear = if done {
            Progress::END
        } else {
            let t = run.elapsed.as_nanos() * u128::from(ANIMATION_NORMALIZED_MAX) / run.spec.duration.as_nanos();
            Progress::new(t as u32)
        };
        let mut progress = run.spec.curve.apply(linear);
        if run.spec.reverse {
            progress = progress.reversed();
        }
        log::trace!("animation tick {}/{}", progress.value(), progress.max());
        events.push(ClockEvent::Tick(progress));

        if done {
            log::trace!("animation finished");
            self.running = None;
            events.push(ClockEvent::Finished(true));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    fn ticks(events: &[ClockEvent]) -> Vec<u32> {
        events
            .iter()
            .filter_map(|e| match e {
                ClockEvent::Tick(p) => Some(p.value()),
                ClockEvent::Finished(_) => None,
            })
            .collect()
    }

    fn run_to_end(clock: &mut AnimationClock, step: Duration) -> Vec<ClockEvent> {
        let mut all = Vec::new();
        for _ in 0..10_000 {
            let events = clock.advance(step);
            let done = events.contains(&ClockEvent::Finished(true));
            all.extend(events);
            if done {
                break;
            }
        }
        all
    }

    // ── forward ───────────────────────────────────────────────────────────

    #[test]
    fn idle_clock_is_silent() {
        let mut clock = AnimationClock::new();
        assert!(clock.advance(ms(16)).is_empty());
    }

    #[test]
    fn forward_run_ticks_up_to_max_then_finishes() {
        let mut clock = AnimationClock::new();
        clock.schedule(AnimationSpec::new(ms(1200)));
        let events = run_to_end(&mut clock, ms(33));

        let values = ticks(&events);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*values.last().unwrap(), ANIMATION_NORMALIZED_MAX);
        assert_eq!(events.last(), Some(&ClockEvent::Finished(true)));
        assert!(!clock.is_scheduled());
    }

    #[test]
    fn linear_midpoint() {
        let mut clock = AnimationClock::new();
        clock.schedule(AnimationSpec::new(ms(1000)).curve(AnimationCurve::Linear));
        let events = clock.advance(ms(500));
        assert_eq!(events, vec![ClockEvent::Tick(Progress::new(32767))]);
    }

    #[test]
    fn overshooting_step_lands_on_end() {
        let mut clock = AnimationClock::new();
        clock.schedule(AnimationSpec::new(ms(100)));
        let events = clock.advance(ms(5000));
        assert_eq!(events, vec![ClockEvent::Tick(Progress::END), ClockEvent::Finished(true)]);
    }

    #[test]
    fn zero_duration_completes_on_first_advance() {
        let mut clock = AnimationClock::new();
        clock.schedule(AnimationSpec::new(Duration::ZERO));
        let events = clock.advance(Duration::ZERO);
        assert_eq!(events, vec![ClockEvent::Tick(Progress::END), ClockEvent::Finished(true)]);
    }

    // ── reverse ───────────────────────────────────────────────────────────

    #[test]
    fn reversed_run_ticks_down_to_zero() {
        let mut clock = AnimationClock::new();
        clock.schedule(AnimationSpec::new(ms(1200)).reverse(true));
        let events = run_to_end(&mut clock, ms(33));

        let values = ticks(&events);
        assert!(values[0] > ANIMATION_NORMALIZED_MAX / 2);
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(*values.last().unwrap(), 0);
    }

    // ── stop ──────────────────────────────────────────────────────────────

    #[test]
    fn replacing_reports_unfinished_first() {
        let mut clock = AnimationClock::new();
        clock.schedule(AnimationSpec::new(ms(1200)));
        clock.advance(ms(100));
        clock.schedule(AnimationSpec::new(ms(1200)).reverse(true));

        let events = clock.advance(ms(100));
        assert_eq!(events[0], ClockEvent::Finished(false));
        assert!(matches!(events[1], ClockEvent::Tick(_)));
        assert!(clock.current().unwrap().reverse);
    }

    #[test]
    fn unschedule_reports_unfinished_once() {
        let mut clock = AnimationClock::new();
        clock.schedule(AnimationSpec::default());
        clock.unschedule();
        clock.unschedule();
        assert_eq!(clock.advance(ms(16)), vec![ClockEvent::Finished(false)]);
        assert!(clock.advance(ms(16)).is_empty());
    }
}
