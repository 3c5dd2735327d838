//! Board fullness.

use tracing::instrument;

use super::super::types::{Board, Cell};

/// Checks whether every square is occupied.
///
/// A full board with no winner is a draw. That composition is left to
/// callers, so the win detector and this check each answer exactly one
/// question.
#[instrument(level = "debug")]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}
