//! Non-interactive replay of a scripted move list.
//!
//! `noughts replay 5 1 9 ...` runs the whole script through the engine
//! and prints the move list, the final board, and the outcome. Unlike
//! interactive play, a bad scripted move is a loud error.

use derive_more::Display;
use serde::Serialize;
use tracing::{info, instrument};

use crate::game::{Mark, PlacedMove, Position, Session, is_full};

/// Error turning a command-line token into a position.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("unrecognized move {:?} (expected 1-9 or a label like \"center\")", token)]
pub struct ParseMoveError {
    /// The offending token.
    pub token: String,
}

impl std::error::Error for ParseMoveError {}

/// Parses command-line move tokens in play order.
#[instrument]
pub fn parse_moves(tokens: &[String]) -> Result<Vec<Position>, ParseMoveError> {
    tokens
        .iter()
        .map(|token| {
            Position::parse(token).ok_or_else(|| ParseMoveError {
                token: token.clone(),
            })
        })
        .collect()
}

/// One applied move in a replay report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// The mark that was placed.
    pub mark: Mark,
    /// The position it was placed at.
    pub position: Position,
    /// 1-based display column.
    pub column: usize,
    /// 1-based display row.
    pub row: usize,
}

impl From<PlacedMove> for MoveRecord {
    fn from(placed: PlacedMove) -> Self {
        Self {
            mark: placed.mark,
            position: placed.position,
            column: placed.column(),
            row: placed.row(),
        }
    }
}

/// Machine-readable summary of a replayed game.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Every applied move in play order.
    pub moves: Vec<MoveRecord>,
    /// The winning mark on the final snapshot, if any.
    pub winner: Option<Mark>,
    /// True when the final snapshot is full with no winner.
    pub draw: bool,
}

impl ReplayReport {
    /// Builds a report from a replayed session.
    #[instrument(skip(session), fields(entry_count = session.entries().len()))]
    pub fn from_session(session: &Session) -> Self {
        let moves = (1..session.entries().len())
            .filter_map(|k| session.move_leading_to(k))
            .map(MoveRecord::from)
            .collect();
        let winner = session.winner();
        let draw = winner.is_none() && is_full(session.current());
        Self { moves, winner, draw }
    }
}

/// Replays the given tokens and prints a report to stdout.
#[instrument(skip(tokens), fields(token_count = tokens.len()))]
pub fn run(tokens: &[String], json: bool) -> anyhow::Result<()> {
    let moves = parse_moves(tokens)?;
    let session = Session::replay(&moves)?;
    let report = ReplayReport::from_session(&session);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text_report(&session, &report);
    }
    info!(moves = report.moves.len(), "Replay finished");
    Ok(())
}

fn print_text_report(session: &Session, report: &ReplayReport) {
    for (number, record) in report.moves.iter().enumerate() {
        println!(
            "{}. {} at ({}, {})",
            number + 1,
            record.mark,
            record.column,
            record.row
        );
    }
    println!();
    println!("{}", session.current());
    println!();
    match (report.winner, report.draw) {
        (Some(mark), _) => println!("Winner: {mark}"),
        (None, true) => println!("Draw"),
        (None, false) => println!("Next player: {}", session.to_move()),
    }
}
