//! Type-safe board positions.

use serde::{Deserialize, Serialize};

use super::types::Board;

/// A position on the 3x3 board.
///
/// Using an enum instead of a bare index makes out-of-range input
/// unrepresentable at the session boundary; conversions to and from
/// row-major indices live here so no other module does index math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left corner (key 1).
    TopLeft,
    /// Top-center edge (key 2).
    TopCenter,
    /// Top-right corner (key 3).
    TopRight,
    /// Middle-left edge (key 4).
    MiddleLeft,
    /// Center square (key 5).
    Center,
    /// Middle-right edge (key 6).
    MiddleRight,
    /// Bottom-left corner (key 7).
    BottomLeft,
    /// Bottom-center edge (key 8).
    BottomCenter,
    /// Bottom-right corner (key 9).
    BottomRight,
}

impl Position {
    /// All nine positions in row-major board order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts to the row-major board index (0-8).
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Position::ALL.get(index).copied()
    }

    /// Display label for this position.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// 1-based display column (1 = left, 3 = right).
    pub fn column(self) -> usize {
        self.index() % 3 + 1
    }

    /// 1-based display row (1 = top, 3 = bottom).
    pub fn row(self) -> usize {
        self.index() / 3 + 1
    }

    /// Parses a position from a `1`-`9` board key or a label such as
    /// `center`. Labels match case-insensitively; anything else is
    /// `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if let Ok(key) = trimmed.parse::<usize>() {
            if (1..=9).contains(&key) {
                return Self::from_index(key - 1);
            }
            return None;
        }
        <Self as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(trimmed))
    }

    /// Positions whose cell is still empty on the given board.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
