use crate::render::DrawContext;
use crate::transform::Progress;

use super::ctx::RuntimeCtx;

/// Callbacks an animated component receives from its host.
///
/// Calls are serialized: the host never invokes two methods at once and never
/// re-enters a handler from inside one of its callbacks.
pub trait AnimationHandler {
    /// Called once when the display surface is created.
    fn on_load(&mut self, ctx: &mut RuntimeCtx) {
        let _ = ctx;
    }

    /// Called for every clock tick of the running animation.
    fn on_tick(&mut self, progress: Progress, ctx: &mut RuntimeCtx);

    /// Called when the running animation stops. `finished` is `false` when it
    /// was replaced or unscheduled before reaching its end.
    fn on_finished(&mut self, finished: bool, ctx: &mut RuntimeCtx);

    /// Called when the handler's layer is redrawn. Drawing coordinates are
    /// relative to the layer.
    fn on_redraw(&mut self, gfx: &mut dyn DrawContext);

    /// Called once when the display surface is torn down.
    fn on_unload(&mut self) {}
}
