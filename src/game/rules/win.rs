//! Win detection.

use tracing::instrument;

use super::super::position::Position;
use super::super::types::{Board, Cell, Mark};

/// Checks a board snapshot for a winning mark.
///
/// Scans the eight winning triples (three rows, three columns, two
/// diagonals) and returns the mark occupying all three cells of the
/// first uniform non-empty triple, or `None` when no triple qualifies.
///
/// A full board with no winner still returns `None`; callers tell a
/// draw apart by also checking [`is_full`](super::is_full).
#[instrument(level = "debug")]
pub fn winner(board: &Board) -> Option<Mark> {
    const LINES: [[Position; 3]; 8] = [
        // Rows
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [Position::MiddleLeft, Position::Center, Position::MiddleRight],
        [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
        // Columns
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
        [Position::TopCenter, Position::Center, Position::BottomCenter],
        [Position::TopRight, Position::MiddleRight, Position::BottomRight],
        // Diagonals
        [Position::TopLeft, Position::Center, Position::BottomRight],
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ];

    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            if let Cell::Marked(mark) = cell {
                return Some(mark);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, &(pos, mark)| board.with_mark(pos, mark))
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_row_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::O),
            (Position::Center, Mark::O),
        ]);
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_column_win() {
        let board = board_with(&[
            (Position::TopCenter, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomCenter, Mark::O),
            (Position::TopLeft, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_diagonal_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::Center, Mark::X),
            (Position::BottomRight, Mark::X),
        ]);
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(&[
            (Position::TopRight, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomLeft, Mark::O),
        ]);
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        // X O X / O X X / O X O, a classic stalemate layout.
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::O),
            (Position::Center, Mark::X),
            (Position::MiddleRight, Mark::X),
            (Position::BottomLeft, Mark::O),
            (Position::BottomCenter, Mark::X),
            (Position::BottomRight, Mark::O),
        ]);
        assert_eq!(winner(&board), None);
    }
}
