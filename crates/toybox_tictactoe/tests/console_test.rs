//! Tests for the console game session.

use std::io::Cursor;
use toybox_tictactoe::{ConsoleSession, Outcome, Player, SessionError};

/// Plays a game from scripted input, returning the outcome and the transcript.
fn play(script: &str) -> (Result<Outcome, SessionError>, String) {
    let mut session = ConsoleSession::new(Cursor::new(script.to_string()), Vec::new());
    let result = session.play();
    let transcript = String::from_utf8(session.into_output()).unwrap();
    (result, transcript)
}

#[test]
fn test_top_row_win_transcript() {
    let (result, transcript) = play("0\n0\n1\n1\n0\n1\n2\n2\n0\n2\n");
    assert_eq!(result.unwrap(), Outcome::Winner(Player::One));

    let expected = "\
0 0 0\n0 0 0\n0 0 0\n\n\
Player 1's turn\n\
Enter row (0-2): Enter column (0-2): 1 0 0\n0 0 0\n0 0 0\n\n\
Player 2's turn\n\
Enter row (0-2): Enter column (0-2): 1 0 0\n0 2 0\n0 0 0\n\n\
Player 1's turn\n\
Enter row (0-2): Enter column (0-2): 1 1 0\n0 2 0\n0 0 0\n\n\
Player 2's turn\n\
Enter row (0-2): Enter column (0-2): 1 1 0\n0 2 0\n0 0 2\n\n\
Player 1's turn\n\
Enter row (0-2): Enter column (0-2): 1 1 1\n0 2 0\n0 0 2\n\n\
Player 1 wins!\n";
    assert_eq!(transcript, expected);
}

#[test]
fn test_draw_after_nine_moves() {
    // 1 2 1 / 1 2 2 / 2 1 1
    let script = "0\n0\n1\n1\n0\n2\n0\n1\n1\n0\n1\n2\n2\n1\n2\n0\n2\n2\n";
    let (result, transcript) = play(script);
    assert_eq!(result.unwrap(), Outcome::Draw);
    assert!(transcript.ends_with("1 2 1\n1 2 2\n2 1 1\n\nIt's a draw!\n"));
    assert_eq!(transcript.matches("'s turn").count(), 9);
}

#[test]
fn test_occupied_cell_reprompts_same_player() {
    // Player 2 tries the square player 1 just took, then plays the center.
    let script = "0\n0\n0\n0\n1\n1\n";
    let (result, transcript) = play(script);
    assert!(matches!(result, Err(SessionError::InputClosed)));

    assert!(transcript.contains(
        "Player 2's turn\nEnter row (0-2): Enter column (0-2): Invalid move, try again.\n\
         Enter row (0-2): Enter column (0-2): 1 0 0\n0 2 0\n0 0 0\n\nPlayer 1's turn\n"
    ));
}

#[test]
fn test_non_integer_row_skips_column_prompt() {
    let (result, transcript) = play("abc\n0\n0\n");
    assert!(matches!(result, Err(SessionError::InputClosed)));
    assert!(transcript.starts_with(
        "0 0 0\n0 0 0\n0 0 0\n\nPlayer 1's turn\n\
         Enter row (0-2): Invalid input, try again.\n\
         Enter row (0-2): Enter column (0-2): 1 0 0\n"
    ));
}

#[test]
fn test_non_integer_column_rejected() {
    let (_, transcript) = play("1\nx\n");
    assert!(transcript.contains("Enter column (0-2): Invalid input, try again.\n"));
}

#[test]
fn test_out_of_range_reprompts() {
    let (_, transcript) = play("3\n0\n-1\n1\n1\n1\n");
    assert_eq!(transcript.matches("Invalid move, try again.").count(), 2);
    assert!(transcript.contains("0 0 0\n0 1 0\n0 0 0\n\nPlayer 2's turn\n"));
}

#[test]
fn test_invalid_attempts_do_not_count_as_moves() {
    // Nine legal moves with rejected attempts mixed in still end in a draw.
    let script = "0\n0\n0\n0\nfoo\n1\n1\n0\n2\n9\n9\n0\n1\n1\n0\n1\n2\n2\n1\n2\n0\n2\n2\n";
    let (result, transcript) = play(script);
    assert_eq!(result.unwrap(), Outcome::Draw);
    assert_eq!(transcript.matches("'s turn").count(), 9);
}

#[test]
fn test_oversized_row_is_an_invalid_move() {
    let (result, transcript) = play("99999999999999999999\n0\n");
    assert!(matches!(result, Err(SessionError::InputClosed)));
    assert!(transcript.ends_with(
        "Player 1's turn\nEnter row (0-2): Enter column (0-2): Invalid move, try again.\n\
         Enter row (0-2): "
    ));
}

#[test]
fn test_whitespace_around_numbers_accepted() {
    let (_, transcript) = play("  1 \n\t1\n");
    assert!(transcript.contains("0 0 0\n0 1 0\n0 0 0\n"));
}

#[test]
fn test_empty_input_is_fatal() {
    let (result, transcript) = play("");
    assert!(matches!(result, Err(SessionError::InputClosed)));
    assert!(transcript.ends_with("Enter row (0-2): "));
}
