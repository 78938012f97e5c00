//! Integration tests for complete game sessions
//!
//! Full sessions are driven through in-memory readers and writers, so
//! every message the player would see is captured and checked.

use std::io::Cursor;

use mazeterm::game::{run_interactive, run_script, GameOutcome};
use mazeterm::models::Grid;
use mazeterm::Command;
use mazeterm::Direction;

fn grid() -> Grid {
    Grid::from_rows(&["#####", "#S  #", "# # #", "#  E#", "#####"], 5, 5).unwrap()
}

fn interactive(input: &str) -> (GameOutcome, String) {
    let grid = grid();
    let mut out = Vec::new();
    let outcome = run_interactive(&grid, Cursor::new(input.to_string()), &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

fn scripted(script: &[Command]) -> (GameOutcome, String) {
    let grid = grid();
    let mut out = Vec::new();
    let outcome = run_script(&grid, script, &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn test_winning_interactive_session() {
    let (outcome, output) = interactive("d\nd\ns\ns\n");
    assert_eq!(outcome, GameOutcome::Won);
    assert!(output.contains("Welcome to the maze!"));
    assert!(output.contains("Congratulations! You found your way out of the maze!"));
}

#[test]
fn test_initial_map_shows_player_on_start() {
    let (_, output) = interactive("q\n");
    assert!(output.contains("#X  #"));
}

#[test]
fn test_blocked_move_reports_and_continues() {
    let (outcome, output) = interactive("w\nq\n");
    assert_eq!(outcome, GameOutcome::Quit);
    assert!(output.contains("Cannot move that way"));
}

#[test]
fn test_unrecognized_command_reports_and_continues() {
    let (outcome, output) = interactive("z\n7\nq\n");
    assert_eq!(outcome, GameOutcome::Quit);
    assert_eq!(output.matches("Invalid command").count(), 2);
}

#[test]
fn test_uppercase_commands_accepted() {
    let (outcome, _) = interactive("D\nD\nS\nS\n");
    assert_eq!(outcome, GameOutcome::Won);
}

#[test]
fn test_blank_lines_just_reprompt() {
    let (outcome, output) = interactive("\n\nq\n");
    assert_eq!(outcome, GameOutcome::Quit);
    assert!(!output.contains("Invalid command"));
}

#[test]
fn test_show_map_tracks_player() {
    let (_, output) = interactive("d\nm\nq\n");
    // After one step right the player sits beside the start cell.
    assert!(output.contains("#SX #"));
}

#[test]
fn test_eof_ends_session_cleanly() {
    let (outcome, output) = interactive("d\n");
    assert_eq!(outcome, GameOutcome::Quit);
    assert!(output.contains("Quitting the game."));
}

#[test]
fn test_scripted_win_matches_interactive_walk() {
    let script = [
        Command::Move(Direction::Right),
        Command::Move(Direction::Right),
        Command::Move(Direction::Down),
        Command::Move(Direction::Down),
    ];
    let (outcome, output) = scripted(&script);
    assert_eq!(outcome, GameOutcome::Won);
    assert!(output.contains("Congratulations"));
}

#[test]
fn test_script_quit_stops_playback() {
    let script = [
        Command::Move(Direction::Right),
        Command::Quit,
        Command::Move(Direction::Right),
    ];
    let (outcome, output) = scripted(&script);
    assert_eq!(outcome, GameOutcome::Quit);
    assert!(output.contains("Quitting the game."));
}

#[test]
fn test_script_exhaustion_reported() {
    let script = [Command::Move(Direction::Right)];
    let (outcome, output) = scripted(&script);
    assert_eq!(outcome, GameOutcome::ScriptExhausted);
    assert!(output.contains("Ran out of instructions"));
}

#[test]
fn test_script_with_blocked_moves_still_wins() {
    let script = [
        Command::Move(Direction::Up),
        Command::Move(Direction::Right),
        Command::Move(Direction::Right),
        Command::Move(Direction::Down),
        Command::Move(Direction::Down),
    ];
    let (outcome, output) = scripted(&script);
    assert_eq!(outcome, GameOutcome::Won);
    assert!(output.contains("Cannot move that way"));
}

#[test]
fn test_winning_move_as_final_script_command() {
    // The win is only observable after the last command; the loop must
    // check once more after the script drains.
    let script = [
        Command::Move(Direction::Down),
        Command::Move(Direction::Down),
        Command::Move(Direction::Right),
        Command::Move(Direction::Right),
    ];
    let (outcome, _) = scripted(&script);
    assert_eq!(outcome, GameOutcome::Won);
}
