//! Settle CLI - debounced watch-and-act
//!
//! Usage: settle <COMMAND>
//!
//! Commands:
//!   build   Rerun a build command once source changes settle
//!   reload  Keep a viewer open and restart it once changes settle
//!   run     Run targets declared in settle.toml

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;
mod ui;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let global = commands::GlobalArgs {
        json: cli.json,
        color: cli.color,
        verbose: cli.verbose,
        config: cli.config,
    };

    match cli.command {
        Commands::Build(args) => commands::watch::cmd_build(&global, args),
        Commands::Reload(args) => commands::watch::cmd_reload(&global, args),
        Commands::Run { targets } => commands::watch::cmd_run(&global, &targets),
    }
}
