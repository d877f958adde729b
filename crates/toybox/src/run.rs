//! Subcommand runners.
//!
//! Each runner writes to any sink so the binary and the tests share them.

use crate::cli::Command;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use toybox_mandelbrot::Viewport;
use toybox_primes::FactorSearch;
use toybox_tictactoe::{ConsoleSession, Outcome};
use tracing::{info, instrument};

/// Prints every number in `2..=limit` with exactly `factors` distinct prime factors.
#[instrument(skip(out))]
pub fn run_primes<W: Write>(limit: u64, factors: u32, out: &mut W) -> Result<()> {
    let search = FactorSearch::new(limit, factors);
    let mut found = 0usize;
    for num in search.matches() {
        writeln!(out, "{}", num)?;
        found += 1;
    }
    out.flush()?;
    info!(found, "Prime factor search complete");
    Ok(())
}

/// Renders the Mandelbrot grid.
#[instrument(skip(out))]
pub fn run_mandelbrot<W: Write>(size: u32, max_iterations: u32, out: &mut W) -> Result<()> {
    Viewport::new(size as usize, max_iterations)
        .render(out)
        .context("Failed to write Mandelbrot grid")?;
    info!("Mandelbrot render complete");
    Ok(())
}

/// Plays one tic-tac-toe game on the given console.
#[instrument(skip_all)]
pub fn run_tictactoe<R: BufRead, W: Write>(input: R, output: W) -> Result<Outcome> {
    let outcome = ConsoleSession::new(input, output)
        .play()
        .context("Tic-tac-toe session ended early")?;
    Ok(outcome)
}

/// Dispatches a parsed command against stdin and stdout.
pub fn run(command: Command) -> Result<()> {
    let stdout = std::io::stdout();
    match command {
        Command::Primes { limit, factors } => run_primes(limit, factors, &mut stdout.lock()),
        Command::Mandelbrot {
            size,
            max_iterations,
        } => run_mandelbrot(size, max_iterations, &mut stdout.lock()),
        Command::Tictactoe => {
            run_tictactoe(std::io::stdin().lock(), stdout.lock()).map(|_| ())
        }
    }
}
