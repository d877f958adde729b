//! Toybox - unified CLI for the prime, Mandelbrot and tic-tac-toe programs.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use toybox::{Cli, init_logging, run};
use tracing::error;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    init_logging();

    let cli = Cli::parse();
    run(cli.command).inspect_err(|e| error!(error = %e, "Command failed"))
}
