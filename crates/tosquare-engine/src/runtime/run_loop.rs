use std::time::Duration;

use crate::animation::{AnimationClock, ClockEvent};
use crate::coords::Rect;
use crate::core::{AnimationHandler, Command, RuntimeCtx};
use crate::render::DrawContext;

use super::{Surface, SurfaceConfig};

/// Lifecycle of the display surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopState {
    Created,
    Loaded,
    Unloaded,
}

/// Single-threaded event loop driving one handler.
///
/// Each [`step`](Self::step) advances the clock, delivers its events one at a
/// time, applies the commands each callback buffered, then redraws the screen
/// if any layer is dirty. Drawing always repaints the background first and
/// the icon layer on top.
pub struct RunLoop<H: AnimationHandler> {
    handler: H,
    clock: AnimationClock,
    surface: Surface,
    ctx: RuntimeCtx,
    state: LoopState,
    frames_drawn: u64,
}

impl<H: AnimationHandler> RunLoop<H> {
    pub fn new(config: SurfaceConfig, handler: H) -> Self {
        Self {
            handler,
            clock: AnimationClock::new(),
            surface: Surface::new(config),
            ctx: RuntimeCtx::new(),
            state: LoopState::Created,
            frames_drawn: 0,
        }
    }

    /// Creates the display surface and lets the handler schedule its first
    /// animation. Only the first call has an effect.
    pub fn load(&mut self) {
        if self.state != LoopState::Created {
            log::warn!("load ignored in state {:?}", self.state);
            return;
        }
        self.state = LoopState::Loaded;
        self.surface.mark_all_dirty();
        self.handler.on_load(&mut self.ctx);
        self.apply_commands();

        let cfg = self.surface.config();
        log::info!(
            "surface loaded: {}x{} screen, icon layer {:?}",
            cfg.screen.w,
            cfg.screen.h,
            cfg.icon_frame
        );
    }

    /// Advances time by `dt`, dispatches clock events and draws into `gfx`
    /// if anything is dirty. Returns whether a frame was drawn.
    pub fn step(&mut self, dt: Duration, gfx: &mut dyn DrawContext) -> bool {
        if self.state != LoopState::Loaded {
            return false;
        }

        for event in self.clock.advance(dt) {
            match event {
                ClockEvent::Tick(progress) => self.handler.on_tick(progress, &mut self.ctx),
                ClockEvent::Finished(finished) => self.handler.on_finished(finished, &mut self.ctx),
            }
            self.apply_commands();
        }

        if !self.surface.take_dirty() {
            return false;
        }
        self.draw(gfx);
        self.frames_drawn += 1;
        true
    }

    /// Tears the surface down. The running animation is dropped without a
    /// finished notification and no further callbacks are made.
    pub fn unload(&mut self) {
        if self.state != LoopState::Loaded {
            return;
        }
        self.clock = AnimationClock::new();
        self.ctx.drain();
        self.handler.on_unload();
        self.state = LoopState::Unloaded;
        log::info!("surface unloaded after {} frame(s)", self.frames_drawn);
    }

    fn apply_commands(&mut self) {
        for command in self.ctx.drain() {
            match command {
                Command::MarkDirty => self.surface.icon_mut().mark_dirty(),
                Command::Schedule(spec) => self.clock.schedule(spec),
                Command::Unschedule => self.clock.unschedule(),
            }
        }
    }

    fn draw(&mut self, gfx: &mut dyn DrawContext) {
        let cfg = *self.surface.config();

        gfx.set_draw_box(self.surface.background().frame());
        gfx.set_fill_color(cfg.background);
        gfx.fill_rect(Rect::from_size(cfg.screen));

        gfx.set_draw_box(self.surface.icon().frame());
        self.handler.on_redraw(gfx);
    }

    #[inline]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    #[inline]
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    #[inline]
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn into_handler(self) -> H {
        self.handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationSpec;
    use crate::controller::{AnimatorConfig, IconAnimator, Phase};
    use crate::coords::{Point, Size};
    use crate::scene::{DrawCmd, DrawList};
    use crate::transform::Progress;
    use tosquare_pdc::{Color8, DrawCommand, DrawCommandImage};

    const FRAME: Duration = Duration::from_millis(100);

    fn icon(x: i16, y: i16) -> DrawCommandImage {
        DrawCommandImage::new(Size::new(50, 50), vec![DrawCommand::path(vec![Point::new(x, y)])])
    }

    fn animator_loop(images: [Option<DrawCommandImage>; 2]) -> RunLoop<IconAnimator> {
        RunLoop::new(SurfaceConfig::default(), IconAnimator::new(images, AnimatorConfig::default()))
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn nothing_happens_before_load() {
        let mut rl = animator_loop([Some(icon(10, 10)), Some(icon(40, 40))]);
        let mut list = DrawList::new();
        assert!(!rl.step(FRAME, &mut list));
        assert!(list.items().is_empty());
        assert!(!rl.clock().is_scheduled());
    }

    #[test]
    fn load_schedules_first_animation() {
        let mut rl = animator_loop([Some(icon(10, 10)), Some(icon(40, 40))]);
        rl.load();
        assert_eq!(rl.state(), LoopState::Loaded);
        let spec = rl.clock().current().unwrap();
        assert_eq!(spec.duration, Duration::from_millis(1200));
        assert!(!spec.reverse);
    }

    #[test]
    fn unload_stops_delivery() {
        let mut rl = animator_loop([Some(icon(10, 10)), Some(icon(40, 40))]);
        rl.load();
        let mut list = DrawList::new();
        rl.step(FRAME, &mut list);
        rl.unload();

        list.clear();
        assert!(!rl.step(FRAME, &mut list));
        assert!(list.items().is_empty());
        assert!(!rl.clock().is_scheduled());
        assert_eq!(rl.state(), LoopState::Unloaded);
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn frame_paints_background_then_icon_layer() {
        let mut rl = animator_loop([Some(icon(10, 10)), Some(icon(40, 40))]);
        rl.load();
        let mut list = DrawList::new();
        assert!(rl.step(FRAME, &mut list));

        let items = list.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].cmd, DrawCmd::FillRect { rect: Rect::new(0, 0, 144, 168), color: Color8::RED });
        assert_eq!(items[0].draw_box, Rect::new(0, 0, 144, 168));
        assert_eq!(items[1].draw_box, Rect::new(50, 50, 50, 50));

        let (image, _) = list.images().next().unwrap();
        let expected = rl.handler().frame().unwrap();
        assert_eq!(image, &expected);
    }

    #[test]
    fn clean_surface_is_not_redrawn() {
        // No animation running, so nothing marks the surface dirty after the first frame.
        let mut rl = RunLoop::new(SurfaceConfig::default(), Scripted::default());
        rl.load();
        let mut list = DrawList::new();
        assert!(rl.step(FRAME, &mut list));
        assert!(!rl.step(FRAME, &mut list));
        assert_eq!(rl.frames_drawn(), 1);
        assert_eq!(rl.handler().log, vec!["load".to_string(), "redraw".into()]);
    }

    #[test]
    fn empty_slot_draws_only_background() {
        let mut rl = animator_loop([None, Some(icon(40, 40))]);
        rl.load();
        let mut list = DrawList::new();
        assert!(rl.step(FRAME, &mut list));
        assert_eq!(list.items().len(), 1);
        assert!(matches!(list.items()[0].cmd, DrawCmd::FillRect { .. }));
    }

    // ── alternation ───────────────────────────────────────────────────────

    #[test]
    fn phases_alternate_every_duration() {
        let mut rl = animator_loop([Some(icon(10, 10)), Some(icon(40, 40))]);
        rl.load();
        let mut list = DrawList::new();

        // 1200 ms at 100 ms per frame: the 12th frame finishes the run.
        for _ in 0..11 {
            rl.step(FRAME, &mut list);
            assert_eq!(rl.handler().state().phase(), Phase::ToSquare);
        }
        rl.step(FRAME, &mut list);
        assert_eq!(rl.handler().state().phase(), Phase::FromSquare);
        assert!(rl.handler().state().progress().is_end());
        assert!(rl.clock().current().unwrap().reverse);

        // Image 1 is drawn fully squared right after the switch.
        let (last, _) = list.images().last().unwrap();
        assert_eq!(last.commands()[0].points, vec![Point::new(49, 49)]);

        for _ in 0..12 {
            rl.step(FRAME, &mut list);
        }
        assert_eq!(rl.handler().state().phase(), Phase::ToSquare);
        assert!(rl.handler().state().progress().is_start());
        let (last, _) = list.images().last().unwrap();
        // Back on image 0 at its native shape (y bias included).
        assert_eq!(last.commands()[0].points, vec![Point::new(10, 11)]);
    }

    // ── dispatch ──────────────────────────────────────────────────────────

    /// Handler that records callbacks and stops its first animation early.
    #[derive(Default)]
    struct Scripted {
        log: Vec<String>,
    }

    impl AnimationHandler for Scripted {
        fn on_load(&mut self, ctx: &mut RuntimeCtx) {
            self.log.push("load".into());
            ctx.mark_dirty();
        }

        fn on_tick(&mut self, progress: Progress, ctx: &mut RuntimeCtx) {
            self.log.push(format!("tick {}", progress.value()));
            ctx.unschedule();
        }

        fn on_finished(&mut self, finished: bool, _ctx: &mut RuntimeCtx) {
            self.log.push(format!("finished {finished}"));
        }

        fn on_redraw(&mut self, _gfx: &mut dyn DrawContext) {
            self.log.push("redraw".into());
        }

        fn on_unload(&mut self) {
            self.log.push("unload".into());
        }
    }

    #[test]
    fn commands_apply_between_callbacks() {
        let mut rl = RunLoop::new(SurfaceConfig::default(), Scripted::default());
        rl.load();
        let mut list = DrawList::new();
        rl.step(FRAME, &mut list);

        rl.handler_mut().log.clear();
        rl.clock.schedule(AnimationSpec::new(Duration::from_millis(1000)));
        rl.step(FRAME, &mut list);
        rl.step(FRAME, &mut list);
        rl.unload();

        assert_eq!(
            rl.into_handler().log,
            vec!["tick 1310".to_string(), "finished false".into(), "unload".into()]
        );
    }
}
