//! Core domain types: marks, cells, and board snapshots.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// A player's mark. X always takes the first move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The first player's mark.
    X,
    /// The second player's mark.
    O,
}

impl Mark {
    /// Returns the mark that moves after this one.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol for display.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Occupied by a mark.
    Marked(Mark),
}

/// An immutable 3x3 board snapshot.
///
/// Cells are stored in row-major order: index `i` is row `i / 3`,
/// column `i % 3` (zero-based). A snapshot is never modified after
/// creation; [`Board::with_mark`] returns a copy with one more cell
/// filled. The whole board is 9 bytes, so it implements `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates the canonical all-empty snapshot.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Checks whether the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns a copy of this snapshot with `mark` placed at `pos`.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[pos.index()] = Cell::Marked(mark);
        next
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, " {} ", index + 1)?,
                    Cell::Marked(mark) => write!(f, " {} ", mark.symbol())?,
                }
            }
        }
        Ok(())
    }
}
