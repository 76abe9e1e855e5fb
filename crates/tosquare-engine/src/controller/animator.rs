use std::time::Duration;

use tosquare_pdc::DrawCommandImage;

use crate::animation::{AnimationCurve, AnimationSpec};
use crate::assets::ImageProvider;
use crate::coords::Point;
use crate::core::{AnimationHandler, RuntimeCtx};
use crate::render::DrawContext;
use crate::transform::{Progress, attract_image};

use super::Phase;

/// Animator configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AnimatorConfig {
    /// Length of each half of the cycle.
    pub duration: Duration,
    /// Pacing of both directions.
    pub curve: AnimationCurve,
}

impl AnimatorConfig {
    pub fn duration(mut self, v: Duration) -> Self { self.duration = v; self }
    pub fn curve(mut self, v: AnimationCurve) -> Self { self.curve = v; self }
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(1200),
            curve: AnimationCurve::EaseInOut,
        }
    }
}

/// Mutable animation state: the phase and the latest clock progress.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct AnimationState {
    phase: Phase,
    progress: Progress,
}

impl AnimationState {
    #[inline]
    pub fn phase(&self) -> Phase { self.phase }

    #[inline]
    pub fn progress(&self) -> Progress { self.progress }

    #[inline]
    pub fn image_index(&self) -> usize { self.phase.image_index() }
}

/// Morphs two icons into and out of their bounding square.
///
/// Source images are never modified; every frame draws a transformed clone.
#[derive(Debug, Clone)]
pub struct IconAnimator {
    images: [Option<DrawCommandImage>; 2],
    state: AnimationState,
    config: AnimatorConfig,
}

impl IconAnimator {
    /// Starts in [`Phase::ToSquare`] at progress 0. Empty slots draw nothing.
    pub fn new(images: [Option<DrawCommandImage>; 2], config: AnimatorConfig) -> Self {
        Self { images, state: AnimationState::default(), config }
    }

    /// Loads both slots from `provider`.
    pub fn from_provider(provider: &dyn ImageProvider, ids: [&str; 2], config: AnimatorConfig) -> Self {
        Self::new(ids.map(|id| provider.load(id)), config)
    }

    #[inline]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Image for the current phase, if its slot loaded.
    pub fn current_image(&self) -> Option<&DrawCommandImage> {
        self.images[self.state.image_index()].as_ref()
    }

    pub fn set_progress(&mut self, progress: Progress) {
        self.state.progress = progress;
    }

    /// Clock configuration for `phase`.
    pub fn spec_for(&self, phase: Phase) -> AnimationSpec {
        AnimationSpec::new(self.config.duration)
            .curve(self.config.curve)
            .reverse(phase.is_reversed())
    }

    /// Flips to the other phase and returns the animation to schedule for it.
    pub fn advance_phase(&mut self) -> AnimationSpec {
        self.state.phase = self.state.phase.next();
        log::debug!("phase -> {:?} (image {})", self.state.phase, self.state.image_index());
        self.spec_for(self.state.phase)
    }

    /// Transformed copy of the current image at the current progress.
    pub fn frame(&self) -> Option<DrawCommandImage> {
        let mut frame = self.current_image()?.clone();
        attract_image(&mut frame, self.state.progress);
        Some(frame)
    }

    /// Draws the current frame at the layer origin. No-op for an empty slot.
    pub fn redraw(&self, gfx: &mut dyn DrawContext) {
        // The frame is dropped at the end of this call.
        let Some(frame) = self.frame() else {
            return;
        };
        gfx.set_antialiased(true);
        gfx.draw_image(&frame, Point::zero());
    }
}

impl AnimationHandler for IconAnimator {
    fn on_load(&mut self, ctx: &mut RuntimeCtx) {
        for (slot, image) in self.images.iter().enumerate() {
            if image.is_none() {
                log::warn!("icon slot {slot} is empty; its phase will draw nothing");
            }
        }
        ctx.schedule(self.spec_for(self.state.phase));
    }

    fn on_tick(&mut self, progress: Progress, ctx: &mut RuntimeCtx) {
        self.set_progress(progress);
        ctx.mark_dirty();
    }

    fn on_finished(&mut self, finished: bool, ctx: &mut RuntimeCtx) {
        // Interrupted runs advance too.
        if !finished {
            log::debug!("animation stopped early; advancing anyway");
        }
        let spec = self.advance_phase();
        ctx.schedule(spec);
    }

    fn on_redraw(&mut self, gfx: &mut dyn DrawContext) {
        self.redraw(gfx);
    }

    fn on_unload(&mut self) {
        log::debug!("animator unloaded in {:?}", self.state.phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Command;
    use crate::scene::{DrawCmd, DrawList};
    use tosquare_pdc::{DrawCommand, Size};

    fn icon(x: i16, y: i16) -> DrawCommandImage {
        DrawCommandImage::new(Size::new(50, 50), vec![DrawCommand::path(vec![Point::new(x, y)])])
    }

    fn animator() -> IconAnimator {
        IconAnimator::new([Some(icon(10, 10)), Some(icon(40, 40))], AnimatorConfig::default())
    }

    fn drawn_points(list: &DrawList) -> Vec<Point> {
        list.images().flat_map(|(image, _)| image.commands()[0].points.clone()).collect()
    }

    // ── start ─────────────────────────────────────────────────────────────

    #[test]
    fn starts_to_square_on_image_zero() {
        let a = animator();
        assert_eq!(a.state().phase(), Phase::ToSquare);
        assert_eq!(a.state().progress(), Progress::START);
        assert_eq!(a.current_image(), Some(&icon(10, 10)));
    }

    #[test]
    fn load_schedules_forward_animation() {
        let mut a = animator();
        let mut ctx = RuntimeCtx::new();
        a.on_load(&mut ctx);
        assert_eq!(
            ctx.commands(),
            &[Command::Schedule(
                AnimationSpec::new(Duration::from_millis(1200)).curve(AnimationCurve::EaseInOut)
            )]
        );
    }

    // ── tick / redraw ─────────────────────────────────────────────────────

    #[test]
    fn tick_stores_progress_and_requests_redraw() {
        let mut a = animator();
        let mut ctx = RuntimeCtx::new();
        a.on_tick(Progress::with_max(600, 1000), &mut ctx);
        assert_eq!(a.state().progress(), Progress::with_max(600, 1000));
        assert_eq!(ctx.commands(), &[Command::MarkDirty]);
    }

    #[test]
    fn redraw_draws_transformed_clone() {
        let mut a = animator();
        let mut ctx = RuntimeCtx::new();
        let mut list = DrawList::new();

        a.on_tick(Progress::with_max(600, 1000), &mut ctx);
        a.on_redraw(&mut list);
        assert_eq!(drawn_points(&list), vec![Point::new(5, 5)]);
        assert!(matches!(list.items()[0].cmd, DrawCmd::Image { antialiased: true, offset: Point { x: 0, y: 0 }, .. }));

        // Source untouched, so the same progress gives the same frame again.
        assert_eq!(a.current_image(), Some(&icon(10, 10)));
        list.clear();
        a.on_redraw(&mut list);
        assert_eq!(drawn_points(&list), vec![Point::new(5, 5)]);
    }

    #[test]
    fn redraw_endpoints() {
        let mut a = animator();
        a.set_progress(Progress::with_max(0, 1000));
        assert_eq!(a.frame().unwrap().commands()[0].points, vec![Point::new(10, 11)]);
        a.set_progress(Progress::with_max(1000, 1000));
        assert_eq!(a.frame().unwrap().commands()[0].points, vec![Point::new(1, 1)]);
    }

    #[test]
    fn empty_slot_draws_nothing() {
        let mut a = IconAnimator::new([Some(icon(10, 10)), None], AnimatorConfig::default());
        let mut ctx = RuntimeCtx::new();
        a.on_finished(true, &mut ctx);

        let mut list = DrawList::new();
        a.on_redraw(&mut list);
        assert!(list.items().is_empty());
        assert!(a.frame().is_none());
    }

    // ── phase alternation ─────────────────────────────────────────────────

    #[test]
    fn finished_alternates_phase_and_direction() {
        let mut a = animator();
        let mut ctx = RuntimeCtx::new();

        a.on_finished(true, &mut ctx);
        assert_eq!(a.state().phase(), Phase::FromSquare);
        assert_eq!(a.current_image(), Some(&icon(40, 40)));
        assert!(matches!(ctx.commands(), [Command::Schedule(spec)] if spec.reverse));

        ctx.drain();
        a.on_finished(true, &mut ctx);
        assert_eq!(a.state().phase(), Phase::ToSquare);
        assert!(matches!(ctx.commands(), [Command::Schedule(spec)] if !spec.reverse));
    }

    #[test]
    fn parity_ignores_finished_flag() {
        for n in 0..12 {
            let mut a = animator();
            let mut ctx = RuntimeCtx::new();
            for i in 0..n {
                // Mix of completed and interrupted runs.
                a.on_finished(i % 3 != 0, &mut ctx);
            }
            let expected = if n % 2 == 0 { Phase::ToSquare } else { Phase::FromSquare };
            assert_eq!(a.state().phase(), expected, "after {n} notifications");
            assert_eq!(ctx.commands().len(), n);
        }
    }

    #[test]
    fn custom_duration_flows_into_specs() {
        let config = AnimatorConfig::default().duration(Duration::from_millis(300)).curve(AnimationCurve::Linear);
        let a = IconAnimator::new([None, None], config);
        let spec = a.spec_for(Phase::FromSquare);
        assert_eq!(spec.duration, Duration::from_millis(300));
        assert_eq!(spec.curve, AnimationCurve::Linear);
        assert!(spec.reverse);
    }
}
