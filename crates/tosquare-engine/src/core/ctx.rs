use crate::animation::AnimationSpec;

/// Request a handler makes of its host.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Redraw the handler's layer on the next draw pass.
    MarkDirty,
    Schedule(AnimationSpec),
    Unschedule,
}

/// Runtime context passed to handler callbacks.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_dirty(&mut self) {
        self.commands.push(Command::MarkDirty);
    }

    pub fn schedule(&mut self, spec: AnimationSpec) {
        self.commands.push(Command::Schedule(spec));
    }

    pub fn unschedule(&mut self) {
        self.commands.push(Command::Unschedule);
    }

    /// Commands buffered since the last drain, in request order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, Command> {
        self.commands.drain(..)
    }
}
