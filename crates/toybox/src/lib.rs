//! Toybox library - the CLI surface shared by the binary and its tests.
//!
//! # Architecture
//!
//! - **Primes**: distinct prime factor search (`toybox_primes`)
//! - **Mandelbrot**: fixed-point ASCII renderer (`toybox_mandelbrot`)
//! - **Tic-tac-toe**: two-player console game (`toybox_tictactoe`)
//!
//! The three programs share nothing but this command-line front end.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod logging;
mod run;

pub use cli::{Cli, Command};
pub use logging::init as init_logging;
pub use run::{run, run_mandelbrot, run_primes, run_tictactoe};
