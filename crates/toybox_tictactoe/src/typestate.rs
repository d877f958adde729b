//! Typestate-based game engine for tic-tac-toe.
//!
//! The game phase is encoded in the type parameter, so a finished game
//! has no way to accept another move.

use super::action::{Move, MoveError};
use super::phases::{AwaitingMove, Draw, Outcome, Won};
use super::position::Position;
use super::rules::{check_winner, is_full};
use super::types::{Board, Player};
use tracing::{debug, instrument};

/// Game state with typestate phase encoding.
///
/// - `Game<AwaitingMove>` - game is ongoing, moves can be made
/// - `Game<Won>` - game ended with a winner
/// - `Game<Draw>` - game ended in a draw
#[derive(Debug, Clone)]
pub struct Game<S> {
    board: Board,
    to_move: Player,
    history: Vec<Move>,
    phase: S,
}

/// Result of placing a mark - explicit state transition.
#[derive(Debug)]
pub enum GameTransition {
    /// Game continues with next player.
    AwaitingMove(Game<AwaitingMove>),
    /// Game ended with a winner.
    Won(Game<Won>),
    /// Game ended in a draw.
    Draw(Game<Draw>),
}

impl GameTransition {
    /// Returns the outcome if this transition ended the game.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameTransition::AwaitingMove(_) => None,
            GameTransition::Won(game) => Some(Outcome::Winner(game.winner())),
            GameTransition::Draw(_) => Some(Outcome::Draw),
        }
    }

    /// Returns the board after the transition.
    pub fn board(&self) -> &Board {
        match self {
            GameTransition::AwaitingMove(game) => game.board(),
            GameTransition::Won(game) => game.board(),
            GameTransition::Draw(game) => game.board(),
        }
    }
}

/// A move the game refused, handed back with the unchanged game.
#[derive(Debug)]
pub struct Rejected {
    /// The game as it was before the attempt.
    pub game: Game<AwaitingMove>,
    /// Why the move was refused.
    pub error: MoveError,
}

impl std::fmt::Display for Rejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move rejected: {}", self.error)
    }
}

impl std::error::Error for Rejected {}

// ─────────────────────────────────────────────────────────────
//  Constructor - always starts awaiting player 1
// ─────────────────────────────────────────────────────────────

impl Game<AwaitingMove> {
    /// Creates a new game with player 1 to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::One,
            history: Vec::new(),
            phase: AwaitingMove,
        }
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Places the current player's mark at `pos`, consuming the game.
    ///
    /// The next state may be:
    /// - `AwaitingMove` with the opponent to move
    /// - `Won` if this move completes a line
    /// - `Draw` if the board is full with no winner
    ///
    /// # Errors
    ///
    /// Returns the untouched game with `MoveError::OccupiedCell` if the
    /// square already holds a mark.
    #[instrument(skip_all, fields(position = %pos, player = %self.to_move))]
    pub fn place(mut self, pos: Position) -> Result<GameTransition, Rejected> {
        let player = self.to_move;
        if let Err(error) = self.board.place(pos, player) {
            debug!(%error, "Placement refused");
            return Err(Rejected { game: self, error });
        }
        self.history.push(Move::new(player, pos));

        if let Some(winner) = check_winner(&self.board) {
            debug!(%winner, "Line completed");
            return Ok(GameTransition::Won(self.into_phase(Won(winner))));
        }

        if is_full(&self.board) {
            debug!("Board full without a line");
            return Ok(GameTransition::Draw(self.into_phase(Draw)));
        }

        self.to_move = player.opponent();
        Ok(GameTransition::AwaitingMove(self))
    }

    /// Applies a move made by a named player.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::WrongPlayer` if `mov.player` is not to move, or
    /// any error from [`Game::place`].
    #[instrument(skip_all, fields(mov = %mov))]
    pub fn apply(self, mov: Move) -> Result<GameTransition, Rejected> {
        if mov.player != self.to_move {
            return Err(Rejected {
                game: self,
                error: MoveError::WrongPlayer(mov.player),
            });
        }
        self.place(mov.position)
    }

    /// Rebuilds a game from a move history.
    ///
    /// # Errors
    ///
    /// Returns the first illegal move's error, or `MoveError::GameOver` if
    /// moves remain after the game has finished.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<GameTransition, MoveError> {
        let mut transition = GameTransition::AwaitingMove(Self::new());
        for &mov in moves {
            let GameTransition::AwaitingMove(game) = transition else {
                return Err(MoveError::GameOver);
            };
            transition = game.apply(mov).map_err(|rejected| rejected.error)?;
        }
        Ok(transition)
    }

    fn into_phase<T>(self, phase: T) -> Game<T> {
        Game {
            board: self.board,
            to_move: self.to_move,
            history: self.history,
            phase,
        }
    }
}

impl Default for Game<AwaitingMove> {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Common methods available on all phases
// ─────────────────────────────────────────────────────────────

impl<S> Game<S> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Game<Won> {
    /// Returns the winner of the game.
    pub fn winner(&self) -> Player {
        self.phase.0
    }
}
