//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. Defaults to `play`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Show the move list newest entry first
        #[arg(long)]
        newest_first: bool,

        /// Path to a TOML preferences file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write tracing output to this file instead of the configured one
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Replay a scripted game and print the result
    Replay {
        /// Moves in play order, each a board key (1-9) or a label like `center`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}
