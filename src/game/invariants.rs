//! First-class session invariants.
//!
//! Invariants express the guarantees every transition must preserve.
//! Each one is a named type implementing [`Invariant`], so tests can
//! exercise them directly and transitions can assert them in debug
//! builds through [`assert_invariants`].

use super::position::Position;
use super::session::Session;
use super::types::{Board, Cell, Mark};

/// A property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks whether the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the guarantee.
    fn description() -> &'static str;
}

/// Entry 0 is the all-empty snapshot, and each later entry adds exactly
/// one mark to an empty cell of its predecessor.
pub struct SnapshotChain;

impl Invariant<Session> for SnapshotChain {
    fn holds(session: &Session) -> bool {
        let entries = session.entries();
        if entries.first() != Some(&Board::new()) {
            return false;
        }
        entries.windows(2).all(|pair| grows_by_one(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "each history entry adds exactly one mark to its predecessor"
    }
}

fn grows_by_one(prev: &Board, next: &Board) -> bool {
    let mut added = 0;
    for pos in Position::ALL {
        match (prev.get(pos), next.get(pos)) {
            (before, after) if before == after => {}
            (Cell::Empty, Cell::Marked(_)) => added += 1,
            // A cleared or overwritten cell can never be a move.
            _ => return false,
        }
    }
    added == 1
}

/// The viewed index always points at an existing entry.
pub struct ViewedInBounds;

impl Invariant<Session> for ViewedInBounds {
    fn holds(session: &Session) -> bool {
        session.viewed_index() < session.entries().len()
    }

    fn description() -> &'static str {
        "the viewed index points at an existing history entry"
    }
}

/// Marks alternate starting with X: every entry holds either equal
/// mark counts or one extra X.
pub struct BalancedMarks;

impl Invariant<Session> for BalancedMarks {
    fn holds(session: &Session) -> bool {
        session.entries().iter().all(|board| {
            let xs = count(board, Mark::X);
            let os = count(board, Mark::O);
            xs == os || xs == os + 1
        })
    }

    fn description() -> &'static str {
        "every history entry holds balanced mark counts"
    }
}

fn count(board: &Board, mark: Mark) -> usize {
    board
        .cells()
        .iter()
        .filter(|cell| **cell == Cell::Marked(mark))
        .count()
}

/// Asserts every session invariant. Transitions call this in debug
/// builds; release builds skip the checks entirely.
pub fn assert_invariants(session: &Session) {
    debug_assert!(
        SnapshotChain::holds(session),
        "{}",
        SnapshotChain::description()
    );
    debug_assert!(
        ViewedInBounds::holds(session),
        "{}",
        ViewedInBounds::description()
    );
    debug_assert!(
        BalancedMarks::holds(session),
        "{}",
        BalancedMarks::description()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played_session() -> Session {
        Session::new()
            .apply_move(Position::Center)
            .apply_move(Position::TopLeft)
            .apply_move(Position::BottomRight)
    }

    #[test]
    fn test_fresh_session_satisfies_all_invariants() {
        let session = Session::new();
        assert!(SnapshotChain::holds(&session));
        assert!(ViewedInBounds::holds(&session));
        assert!(BalancedMarks::holds(&session));
    }

    #[test]
    fn test_played_session_satisfies_all_invariants() {
        let session = played_session();
        assert!(SnapshotChain::holds(&session));
        assert!(ViewedInBounds::holds(&session));
        assert!(BalancedMarks::holds(&session));
    }

    #[test]
    fn test_time_traveled_session_satisfies_all_invariants() {
        let session = played_session().jump_to(1);
        assert!(SnapshotChain::holds(&session));
        assert!(ViewedInBounds::holds(&session));
        assert!(BalancedMarks::holds(&session));
    }

    #[test]
    fn test_snapshot_chain_rejects_non_empty_start() {
        let session = Session {
            entries: vec![Board::new().with_mark(Position::Center, Mark::X)],
            viewed: 0,
        };
        assert!(!SnapshotChain::holds(&session));
    }

    #[test]
    fn test_snapshot_chain_rejects_double_placement() {
        let start = Board::new();
        let jumped = start
            .with_mark(Position::Center, Mark::X)
            .with_mark(Position::TopLeft, Mark::O);
        let session = Session {
            entries: vec![start, jumped],
            viewed: 1,
        };
        assert!(!SnapshotChain::holds(&session));
    }

    #[test]
    fn test_snapshot_chain_rejects_overwritten_cell() {
        let start = Board::new();
        let first = start.with_mark(Position::Center, Mark::X);
        let overwritten = start.with_mark(Position::Center, Mark::O);
        let session = Session {
            entries: vec![start, first, overwritten],
            viewed: 2,
        };
        assert!(!SnapshotChain::holds(&session));
    }

    #[test]
    fn test_viewed_in_bounds_rejects_dangling_index() {
        let session = Session {
            entries: vec![Board::new()],
            viewed: 1,
        };
        assert!(!ViewedInBounds::holds(&session));
    }

    #[test]
    fn test_balanced_marks_rejects_same_mark_twice() {
        let start = Board::new();
        let first = start.with_mark(Position::Center, Mark::X);
        let second = first.with_mark(Position::TopLeft, Mark::X);
        let session = Session {
            entries: vec![start, first, second],
            viewed: 2,
        };
        assert!(!BalancedMarks::holds(&session));
    }

    #[test]
    fn test_descriptions_are_stable() {
        assert!(SnapshotChain::description().contains("one mark"));
        assert!(ViewedInBounds::description().contains("viewed index"));
        assert!(BalancedMarks::description().contains("balanced"));
    }
}
