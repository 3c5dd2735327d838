//! Cursor movement on the board grid.

use crossterm::event::KeyCode;

use crate::game::Position;

/// Moves the cursor one cell in the direction of an arrow key.
///
/// The cursor stops at the board edge rather than wrapping; any other
/// key leaves it in place.
pub fn move_cursor(cursor: Position, code: KeyCode) -> Position {
    let index = cursor.index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match code {
        KeyCode::Up if row > 0 => (row - 1, col),
        KeyCode::Down if row < 2 => (row + 1, col),
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Right if col < 2 => (row, col + 1),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
