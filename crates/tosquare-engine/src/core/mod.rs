//! Core host-facing contracts.
//!
//! This module defines the interface between a run loop (the platform, or the
//! reference [`RunLoop`](crate::runtime::RunLoop)) and an animated component.
//! Hosts call the handler; the handler answers through buffered commands.

mod app;
mod ctx;

pub use app::AnimationHandler;
pub use ctx::{Command, RuntimeCtx};
