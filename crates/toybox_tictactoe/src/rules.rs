//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board, kept apart from board storage
//! so the engine and tests can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
