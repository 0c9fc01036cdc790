use std::path::PathBuf;

use crate::cli::ColorWhen;

pub mod watch;

/// Flags every command receives
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub json: bool,
    pub color: Option<ColorWhen>,
    pub verbose: u8,
    pub config: Option<PathBuf>,
}
