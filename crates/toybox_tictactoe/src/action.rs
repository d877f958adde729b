//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::{Player, Position};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} -> {}", self.player, self.position)
    }
}

/// Error that can occur when entering, validating or applying a move.
///
/// Every variant is recoverable: the same player is asked again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The entered text is not an integer.
    #[display("Not an integer: {:?}", _0)]
    NonIntegerInput(String),

    /// Row or column lies outside 0-2.
    #[display("Coordinate ({}, {}) is off the board", row, col)]
    OutOfRangeCoordinate {
        /// Entered row.
        row: i64,
        /// Entered column.
        col: i64,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    OccupiedCell(Position),

    /// It's not this player's turn.
    #[display("It's not player {}'s turn", _0)]
    WrongPlayer(Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl MoveError {
    /// True when the text itself could not be read as a number.
    pub fn is_input_error(&self) -> bool {
        matches!(self, MoveError::NonIntegerInput(_))
    }
}

impl std::error::Error for MoveError {}
