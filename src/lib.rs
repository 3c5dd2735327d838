//! Terminal tic-tac-toe with a rewindable move history.
//!
//! The crate splits into a pure engine and thin presentation layers:
//!
//! - [`game`]: board snapshots, win detection, the move differ, and
//!   the session history store with time-travel.
//! - [`tui`]: the interactive ratatui screen.
//! - [`replay`]: scripted games for the command line.
//! - [`cli`] and [`config`]: argument parsing and the preferences file.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod game;
pub mod replay;
pub mod tui;

pub use config::{Config, ConfigError};
pub use game::{Board, Cell, Mark, PlacedMove, Position, ReplayError, Session};
