use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

/// Plays the to-square / from-square cycle and prints frames as text.
///
/// Without icon paths the built-in rain and document icons are used.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "tosquare-studio", version)]
pub struct StudioArgs {
    /// Icon morphed into the square
    #[arg(value_name = "ICON0.pdc", requires = "icon1")]
    icon0: Option<PathBuf>,

    /// Icon morphed back out of the square
    #[arg(value_name = "ICON1.pdc")]
    icon1: Option<PathBuf>,

    /// Full to-square + from-square cycles to play
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub cycles: u32,

    /// Simulated frame interval in milliseconds
    #[arg(
        long = "frame-ms",
        value_name = "N",
        default_value_t = 100,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    frame_ms: u64,

    /// Print every Nth drawn frame
    #[arg(
        long = "every",
        value_name = "N",
        default_value_t = 2,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub print_every: u64,

    /// Write the built-in icons as .pdc files to DIR and exit
    #[arg(long = "export", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,
}

impl StudioArgs {
    /// Both icon paths, or `None` when the built-in icons should be used.
    pub fn icons(&self) -> Option<[&Path; 2]> {
        match (&self.icon0, &self.icon1) {
            (Some(a), Some(b)) => Some([a.as_path(), b.as_path()]),
            _ => None,
        }
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    /// Phase switches needed to play every requested cycle.
    pub fn phase_switches(&self) -> u64 {
        u64::from(self.cycles).saturating_mul(2)
    }
}
