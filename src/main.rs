//! Command-line entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use noughts::cli::{Cli, Command};
use noughts::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => run_play(false, None, None),
        Some(Command::Play {
            newest_first,
            config,
            log_file,
        }) => run_play(newest_first, config, log_file),
        Some(Command::Replay { moves, json }) => run_replay(&moves, json),
    }
}

fn run_play(
    newest_first: bool,
    config_path: Option<PathBuf>,
    log_file: Option<PathBuf>,
) -> Result<()> {
    // The TUI installs its own file-backed subscriber; nothing may
    // write to stdout while the alternate screen is up.
    let config = Config::resolve(config_path.as_deref())?.with_overrides(newest_first, log_file);
    noughts::tui::run(&config)
}

fn run_replay(moves: &[String], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    noughts::replay::run(moves, json)
}
