//! Logging utilities.
//!
//! Libraries in this workspace only use the `log` facade; this module wires
//! `env_logger` behind it for binaries.

mod init;

pub use init::{LoggingConfig, init_logging};
