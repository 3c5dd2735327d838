//! Describing the move between two consecutive snapshots.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::position::Position;
use super::types::{Board, Cell, Mark};

/// The single placement that separates two consecutive snapshots.
///
/// Displays as `X at (2, 3)` with 1-based (column, row) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedMove {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl PlacedMove {
    /// 1-based display column (1 = left).
    pub fn column(&self) -> usize {
        self.position.column()
    }

    /// 1-based display row (1 = top).
    pub fn row(&self) -> usize {
        self.position.row()
    }
}

impl std::fmt::Display for PlacedMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at ({}, {})", self.mark, self.column(), self.row())
    }
}

/// Finds the placement that turned `prev` into `next`.
///
/// Returns `None` when the snapshots are identical, which a well-formed
/// history only produces for the start-of-game entry. Consecutive
/// entries differ in at most one cell, and only ever by filling an
/// empty one; either violation trips a debug assertion and is ignored
/// in release builds.
#[instrument(level = "debug")]
pub fn diff(prev: &Board, next: &Board) -> Option<PlacedMove> {
    let mut placed = None;
    for pos in Position::ALL {
        if prev.get(pos) == next.get(pos) {
            continue;
        }
        debug_assert!(
            placed.is_none(),
            "consecutive snapshots differ at more than one cell"
        );
        match next.get(pos) {
            Cell::Marked(mark) => placed = Some(PlacedMove { mark, position: pos }),
            Cell::Empty => debug_assert!(false, "cell cleared between snapshots"),
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_snapshots_yield_none() {
        let board = Board::new().with_mark(Position::Center, Mark::X);
        assert_eq!(diff(&board, &board), None);
    }

    #[test]
    fn test_single_placement_is_reported() {
        let prev = Board::new().with_mark(Position::Center, Mark::X);
        let next = prev.with_mark(Position::TopRight, Mark::O);

        let placed = diff(&prev, &next);
        assert_eq!(
            placed,
            Some(PlacedMove {
                mark: Mark::O,
                position: Position::TopRight,
            })
        );
    }

    #[test]
    fn test_display_uses_column_row_order() {
        let placed = PlacedMove {
            mark: Mark::X,
            position: Position::BottomLeft,
        };
        // Bottom-left is column 1, row 3.
        assert_eq!(placed.to_string(), "X at (1, 3)");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "more than one cell")]
    fn test_multi_cell_change_trips_debug_assertion() {
        let prev = Board::new();
        let next = prev
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::Center, Mark::O);
        let _ = diff(&prev, &next);
    }
}
