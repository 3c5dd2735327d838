//! The session: an append-only snapshot history plus the viewed entry.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::diff::{PlacedMove, diff};
use super::invariants::assert_invariants;
use super::position::Position;
use super::rules;
use super::types::{Board, Mark};

/// A game session: every board snapshot produced so far and the index
/// of the one currently on display.
///
/// The session is a value. Transitions return a fresh `Session` instead
/// of mutating in place, so a caller can never observe a half-applied
/// move, and time-traveled states compare equal to the states they
/// revisit. The mark to move is derived from the viewed index on
/// demand; it is deliberately not a field, so it cannot drift out of
/// sync with the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(super) entries: Vec<Board>,
    pub(super) viewed: usize,
}

impl Session {
    /// Creates a session holding the single all-empty starting snapshot.
    pub fn new() -> Self {
        Self {
            entries: vec![Board::new()],
            viewed: 0,
        }
    }

    /// The full snapshot history, oldest first.
    pub fn entries(&self) -> &[Board] {
        &self.entries
    }

    /// Index of the snapshot currently on display.
    pub fn viewed_index(&self) -> usize {
        self.viewed
    }

    /// The snapshot currently on display.
    pub fn current(&self) -> &Board {
        &self.entries[self.viewed]
    }

    /// The mark that moves next, derived from viewed-index parity.
    ///
    /// Entry 0 is X's turn, entry 1 is O's, and so on. Jumping through
    /// history re-derives the turn from the new index.
    pub fn to_move(&self) -> Mark {
        if self.viewed % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// The winning mark on the viewed snapshot, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(self.current())
    }

    /// Applies a move at `pos` for the mark whose turn it is.
    ///
    /// Entries after the viewed one are discarded, a copy of the viewed
    /// snapshot with the new mark is appended, and the appended entry
    /// becomes the viewed one. A move on an occupied cell or on a board
    /// that already has a winner is declined: the returned session
    /// equals `self`. Declines are expected interactive input, not
    /// errors, so they are logged at debug level and otherwise silent.
    #[instrument(skip(self), fields(viewed = self.viewed, mark = %self.to_move()))]
    pub fn apply_move(&self, pos: Position) -> Session {
        if self.winner().is_some() {
            debug!("Declining move, game already won");
            return self.clone();
        }
        if !self.current().is_empty(pos) {
            debug!("Declining move, cell occupied");
            return self.clone();
        }

        let mark = self.to_move();
        let mut entries = self.entries[..=self.viewed].to_vec();
        entries.push(self.current().with_mark(pos, mark));

        let next = Session {
            viewed: entries.len() - 1,
            entries,
        };
        debug!(entry_count = next.entries.len(), "Move applied");
        assert_invariants(&next);
        next
    }

    /// Time-travels to the history entry at `index`.
    ///
    /// Only the viewed index changes; the entry sequence is untouched,
    /// and the turn follows from the new index's parity.
    ///
    /// # Panics
    ///
    /// Panics if `index` is past the end of the history. Callers only
    /// offer indices of existing entries, so an out-of-range index is a
    /// caller bug rather than user input.
    #[instrument(skip(self), fields(entry_count = self.entries.len()))]
    pub fn jump_to(&self, index: usize) -> Session {
        assert!(
            index < self.entries.len(),
            "jump_to index {index} out of range for {} entries",
            self.entries.len()
        );
        debug!("Time-traveling");
        let next = Session {
            entries: self.entries.clone(),
            viewed: index,
        };
        assert_invariants(&next);
        next
    }

    /// Describes the move that produced entry `k`.
    ///
    /// Entry 0 has no predecessor, so `k == 0` yields `None` through an
    /// explicit bounds check rather than an out-of-range lookup. An
    /// index past the end also yields `None`.
    pub fn move_leading_to(&self, k: usize) -> Option<PlacedMove> {
        if k == 0 || k >= self.entries.len() {
            return None;
        }
        diff(&self.entries[k - 1], &self.entries[k])
    }

    /// Replays a scripted move list onto a fresh session.
    ///
    /// Interactive play declines bad moves silently; a script that
    /// contains one is a mistake worth reporting, so each move is
    /// validated before it is applied.
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(moves: &[Position]) -> Result<Session, ReplayError> {
        let mut session = Session::new();
        for &pos in moves {
            if let Some(winner) = session.winner() {
                return Err(ReplayError::AfterGameOver {
                    winner,
                    position: pos,
                });
            }
            if !session.current().is_empty(pos) {
                return Err(ReplayError::Occupied { position: pos });
            }
            session = session.apply_move(pos);
        }
        Ok(session)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Error applying a scripted move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ReplayError {
    /// The scripted move targets an occupied cell.
    #[display("{} is already occupied", position)]
    Occupied {
        /// The occupied position.
        position: Position,
    },
    /// The script continues past a decided game.
    #[display("{} played after {} had already won", position, winner)]
    AfterGameOver {
        /// The mark that had already won.
        winner: Mark,
        /// The extra scripted move.
        position: Position,
    },
}

impl std::error::Error for ReplayError {}
