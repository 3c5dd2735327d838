//! The game engine: board snapshots, rules, and the move history.
//!
//! Everything here is pure and synchronous. The engine never talks to
//! a terminal; presentation layers read the [`Session`] and render it
//! however they like.

mod diff;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;

pub use diff::{PlacedMove, diff};
pub use position::Position;
pub use rules::{is_full, winner};
pub use session::{ReplayError, Session};
pub use types::{Board, Cell, Mark};
