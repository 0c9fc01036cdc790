//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands. Per-target flags override whatever the config file says.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use settle::config::FailurePolicy;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureArg {
    /// Report the failure and keep watching
    Report,
    /// Stop watching and exit non-zero
    Exit,
}

impl From<FailureArg> for FailurePolicy {
    fn from(arg: FailureArg) -> Self {
        match arg {
            FailureArg::Report => FailurePolicy::Report,
            FailureArg::Exit => FailurePolicy::Exit,
        }
    }
}

/// Settle - rebuild or reload once a burst of file changes settles
#[derive(Parser, Debug)]
#[command(name = "settle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit one JSON object per event (NDJSON)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./settle.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every single-target command
#[derive(Args, Debug, Clone, Default)]
pub struct WatchArgs {
    /// Directory to watch recursively
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Filename suffix that counts as a relevant change (repeatable)
    #[arg(short, long = "suffix")]
    pub suffixes: Vec<String>,

    /// Quiet period before acting, in milliseconds
    #[arg(short, long)]
    pub delay_ms: Option<u64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub watch: WatchArgs,

    /// Shell command to run
    #[arg(short, long)]
    pub command: Option<String>,

    /// Working directory for the command
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// What to do when the command exits non-zero
    #[arg(long, value_enum)]
    pub on_failure: Option<FailureArg>,

    /// Build once before waiting for changes
    #[arg(long)]
    pub initial: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ReloadArgs {
    #[command(flatten)]
    pub watch: WatchArgs,

    /// Viewer command; the entry file is passed as its last argument
    #[arg(long)]
    pub viewer: Option<String>,

    /// File the viewer loads
    #[arg(long)]
    pub entry: Option<PathBuf>,

    /// Keep watching after the viewer is closed
    #[arg(long)]
    pub keep_open: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch sources and rerun a build command once changes settle
    Build(BuildArgs),

    /// Keep a viewer open and restart it once changes settle
    Reload(ReloadArgs),

    /// Run targets declared in the config file
    Run {
        /// Only run these targets (default: all)
        targets: Vec<String>,
    },
}
