//! Tests for argument parsing and subcommand output.

use clap::Parser;
use std::io::Cursor;
use toybox::{Cli, Command, run_mandelbrot, run_primes, run_tictactoe};

#[test]
fn test_primes_defaults() {
    let cli = Cli::try_parse_from(["toybox", "primes"]).unwrap();
    assert_eq!(cli.command, Command::Primes { limit: 100, factors: 3 });
}

#[test]
fn test_mandelbrot_defaults() {
    let cli = Cli::try_parse_from(["toybox", "mandelbrot"]).unwrap();
    assert_eq!(
        cli.command,
        Command::Mandelbrot {
            size: 200,
            max_iterations: 100
        }
    );
}

#[test]
fn test_primes_overrides() {
    let cli = Cli::try_parse_from(["toybox", "primes", "--limit", "50", "-f", "2"]).unwrap();
    assert_eq!(cli.command, Command::Primes { limit: 50, factors: 2 });
}

#[test]
fn test_zero_size_rejected() {
    assert!(Cli::try_parse_from(["toybox", "mandelbrot", "--size", "0"]).is_err());
}

#[test]
fn test_missing_subcommand_rejected() {
    assert!(Cli::try_parse_from(["toybox"]).is_err());
}

#[test]
fn test_tictactoe_subcommand() {
    let cli = Cli::try_parse_from(["toybox", "tictactoe"]).unwrap();
    assert_eq!(cli.command, Command::Tictactoe);
}

#[test]
fn test_primes_output() {
    let mut out = Vec::new();
    run_primes(100, 3, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "30\n42\n60\n66\n70\n78\n84\n90\n");
}

#[test]
fn test_mandelbrot_output_shape() {
    let mut out = Vec::new();
    run_mandelbrot(200, 100, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 200);
    assert!(text.lines().all(|l| l.len() == 200 && l.chars().all(|c| c == '1' || c == '8')));
}

#[test]
fn test_tictactoe_win() {
    let input = Cursor::new("0\n0\n1\n1\n0\n1\n2\n2\n0\n2\n");
    let mut output = Vec::new();
    let outcome = run_tictactoe(input, &mut output).unwrap();
    assert_eq!(outcome.to_string(), "Player 1 wins!");
    assert!(String::from_utf8(output).unwrap().ends_with("Player 1 wins!\n"));
}

#[test]
fn test_tictactoe_closed_input_is_error() {
    let input = Cursor::new("1\n1\n");
    let result = run_tictactoe(input, Vec::new());
    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("Input closed"));
}
