//! Phase types for the typestate state machine.
//!
//! Each phase is carried in `Game<S>` as its `S` parameter. Only `Won`
//! holds data: the player who completed a line.

use super::Player;

/// Phase: waiting for the current player's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AwaitingMove;

/// Phase: a player completed a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Won(pub Player);

/// Phase: the board filled with no winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Draw;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins!", player),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}
