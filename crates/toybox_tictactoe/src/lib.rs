//! Two-player tic-tac-toe played over a line-oriented console.
//!
//! # Architecture
//!
//! - **Types**: players, squares and the 3x3 board
//! - **Rules**: pure win and draw detection over a board
//! - **Typestate**: a game engine whose phase is part of its type
//! - **Console**: the prompt/re-prompt loop driving a game from text input

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod console;
mod phases;
mod position;
mod rules;
mod typestate;
mod types;

pub use action::{Move, MoveError};
pub use console::{ConsoleSession, SessionError};
pub use phases::{AwaitingMove, Draw, Outcome, Won};
pub use position::Position;
pub use rules::{check_winner, is_full};
pub use typestate::{Game, GameTransition, Rejected};
pub use types::{Board, Player, Square};
