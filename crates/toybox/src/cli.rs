//! Command-line interface for toybox.

use clap::{Parser, Subcommand};

/// Toybox - three small classic programs
#[derive(Parser, Debug)]
#[command(name = "toybox")]
#[command(about = "Prime factor counter, Mandelbrot renderer and tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print numbers with an exact count of distinct prime factors
    Primes {
        /// Largest number to test
        #[arg(short, long, default_value = "100")]
        limit: u64,

        /// Required number of distinct prime factors
        #[arg(short, long, default_value = "3")]
        factors: u32,
    },

    /// Print an ASCII Mandelbrot set ('8' inside, '1' outside)
    Mandelbrot {
        /// Pixels per side of the square grid
        #[arg(short, long, default_value = "200", value_parser = clap::value_parser!(u32).range(1..))]
        size: u32,

        /// Iteration cap per pixel
        #[arg(short, long, default_value = "100", value_parser = clap::value_parser!(u32).range(1..))]
        max_iterations: u32,
    },

    /// Play two-player tic-tac-toe on the console
    Tictactoe,
}
