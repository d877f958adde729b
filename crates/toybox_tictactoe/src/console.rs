//! Line-oriented console driver for a two-player game.
//!
//! Reproduces the classic prompt loop: show the board, announce whose turn
//! it is, read a row and a column, and re-prompt the same player until the
//! move is legal.

use super::action::MoveError;
use super::phases::{AwaitingMove, Outcome};
use super::position::Position;
use super::typestate::{Game, GameTransition};
use super::types::Board;
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, info, instrument};

/// Fatal error ending a console session.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Input reached end of stream while a move was expected.
    #[display("Input closed while waiting for a move")]
    InputClosed,
    /// Reading or writing the console failed.
    #[display("Console I/O error: {}", _0)]
    #[from]
    Io(std::io::Error),
}

/// Parses a coordinate typed at the console.
///
/// Integers too large for `i64` saturate, so they fail the board range
/// check instead of being treated as non-numeric text.
fn parse_coordinate(text: &str) -> Result<i64, MoveError> {
    match text.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(MoveError::NonIntegerInput(text.to_string())),
        },
    }
}

/// Console game session over any line reader and writer.
#[derive(Debug)]
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Creates a session reading moves from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the session and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays one game to completion.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InputClosed` if input ends mid-game, or
    /// `SessionError::Io` if the console cannot be read or written.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<Outcome, SessionError> {
        let mut game = Game::new();
        loop {
            self.show_board(game.board())?;
            writeln!(self.output, "Player {}'s turn", game.to_move())?;

            let transition = self.take_turn(game)?;
            let outcome = match transition {
                GameTransition::AwaitingMove(next) => {
                    game = next;
                    continue;
                }
                GameTransition::Won(ref finished) => Outcome::Winner(finished.winner()),
                GameTransition::Draw(_) => Outcome::Draw,
            };

            self.show_board(transition.board())?;
            writeln!(self.output, "{}", outcome)?;
            self.output.flush()?;
            info!(%outcome, "Game finished");
            return Ok(outcome);
        }
    }

    /// Re-prompts the player to move until a legal move is made.
    fn take_turn(&mut self, mut game: Game<AwaitingMove>) -> Result<GameTransition, SessionError> {
        loop {
            let error = match self.read_position()? {
                Ok(pos) => match game.place(pos) {
                    Ok(transition) => return Ok(transition),
                    Err(rejected) => {
                        game = rejected.game;
                        rejected.error
                    }
                },
                Err(error) => error,
            };

            debug!(%error, player = %game.to_move(), "Move rejected");
            let message = if error.is_input_error() {
                "Invalid input, try again."
            } else {
                "Invalid move, try again."
            };
            writeln!(self.output, "{}", message)?;
        }
    }

    /// Reads a row then a column. A non-integer row skips the column prompt.
    fn read_position(&mut self) -> Result<Result<Position, MoveError>, SessionError> {
        let row = match self.read_integer("Enter row (0-2): ")? {
            Ok(row) => row,
            Err(error) => return Ok(Err(error)),
        };
        let col = match self.read_integer("Enter column (0-2): ")? {
            Ok(col) => col,
            Err(error) => return Ok(Err(error)),
        };
        debug!(row, col, "Coordinates entered");
        Ok(Position::from_row_col(row, col).ok_or(MoveError::OutOfRangeCoordinate { row, col }))
    }

    fn read_integer(&mut self, prompt: &str) -> Result<Result<i64, MoveError>, SessionError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(parse_coordinate(line.trim()))
    }

    fn show_board(&mut self, board: &Board) -> Result<(), SessionError> {
        write!(self.output, "{}", board)?;
        writeln!(self.output)?;
        Ok(())
    }
}
