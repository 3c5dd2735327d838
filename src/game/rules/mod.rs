//! Pure rule checks over board snapshots.
//!
//! Rules are free functions of a single snapshot. Keeping them out of
//! the session means the history store stays a plain container and the
//! rules stay trivially testable.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winner;
