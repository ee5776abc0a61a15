//! Transcript tests for the console front end.

use counting_out::{Console, GameConfig};
use std::io::Cursor;

fn run(input: &str, players: Option<usize>, step: Option<usize>) -> String {
    run_with(GameConfig::default(), input, players, step)
}

fn run_with(config: GameConfig, input: &str, players: Option<usize>, step: Option<usize>) -> String {
    let mut output = Vec::new();
    let mut console = Console::new(Cursor::new(input.as_bytes()), &mut output, &config);
    console.run(players, step).expect("Console run failed");
    String::from_utf8(output).expect("Output is UTF-8")
}

fn lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .map(|line| line.trim_start_matches("> "))
        .filter(|line| !line.is_empty())
        .collect()
}

#[test]
fn test_full_game_transcript() {
    let output = run("\n\n\n\n\nq\n", Some(5), Some(2));
    let lines = lines(&output);
    assert_eq!(lines[0], "The game started with N=5 players, K=2 steps");
    assert_eq!(lines[1], "Eliminated player: Player 1");
    assert_eq!(lines[2], "Eliminated player: Player 3");
    assert_eq!(lines[3], "Eliminated player: Player 0");
    assert_eq!(lines[4], "Eliminated player: Player 4");
    assert_eq!(lines[5], "The winner is Player 2!");
}

#[test]
fn test_prompts_for_values() {
    let output = run("2\n1\ne\ne\n", None, None);
    assert!(output.contains("Enter N value: "));
    assert!(output.contains("Enter K value: "));
    assert!(output.contains("Eliminated player: Player 0"));
    assert!(output.contains("The winner is Player 1!"));
}

#[test]
fn test_invalid_values_reprompt() {
    let output = run("abc\n12\n3\n2\n0\n3\n2\nq\n", None, None);
    assert!(output.contains("Invalid input: N must be a whole number, got 'abc'"));
    assert!(output.contains("Invalid input: N must be between 2 and 11, got 12"));
    assert!(output.contains("Invalid input: K must be at least 1, got 0"));
    assert!(output.contains("The game started with N=3 players, K=2 steps"));
}

#[test]
fn test_reset_returns_to_setup() {
    let output = run("e\nr\n2\n1\nq\n", Some(4), Some(1));
    assert!(output.contains("Eliminated player: Player 0"));
    assert!(output.contains("Game reset."));
    assert!(output.contains("The game started with N=2 players, K=1 steps"));
}

#[test]
fn test_unknown_command_is_reported() {
    let output = run("jump\nq\n", Some(3), Some(1));
    assert!(output.contains("Unknown command 'jump'"));
}

#[test]
fn test_end_of_input_stops_cleanly() {
    let output = run("", None, None);
    assert_eq!(output, "Enter N value: ");
}

#[test]
fn test_custom_label() {
    let config = GameConfig::default().with_label("Seat");
    let output = run_with(config, "\n\nq\n", Some(2), Some(1));
    assert!(output.contains("Eliminated player: Seat 0"));
    assert!(output.contains("The winner is Seat 1!"));
}

#[test]
fn test_quit_at_setup_prompt() {
    let output = run("q\n", None, None);
    assert_eq!(output, "Enter N value: ");
}

#[test]
fn test_session_idle_after_winner() {
    let config = GameConfig::default();
    let mut output = Vec::new();
    let mut console = Console::new(Cursor::new("\n\n".as_bytes()), &mut output, &config);
    console.run(Some(2), Some(1)).expect("Console run failed");
    assert!(!console.session().is_in_progress());
}

#[test]
fn test_reset_then_new_round_to_winner() {
    // Reset mid-round, then a full two-player round after it.
    let output = run("r\n2\n1\n\n\nq\n", Some(3), Some(2));
    assert!(output.contains("Game reset."));
    assert!(output.contains("The winner is Player 1!"));
}
