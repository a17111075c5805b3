//! End-to-end console transcripts with the real engine.

use std::io::{Cursor, Write};
use tictactoe_console::{Axis, ConsoleConfig, ConsoleError, GREETING, LineChannel, Orchestrator};
use tictactoe_engine::{Engine, Game, GameStatus, Player};

const PROMPT_X: &str = "Please type number between 0 and 2 for coordinate X";
const PROMPT_Y: &str = "Please type number between 0 and 2 for coordinate Y";
const EMPTY_BOARD: &str = "[ ][ ][ ]\n[ ][ ][ ]\n[ ][ ][ ]";

/// Plays `input` to the end. Running out of input stops the game at the
/// first failed read instead of prompting forever.
fn play(input: &str) -> (Result<GameStatus, ConsoleError>, Game, String) {
    let channel = LineChannel::new(Cursor::new(input.to_string()), Vec::new());
    let mut orchestrator = Orchestrator::new(Game::new(), channel).with_max_read_failures(Some(1));
    let result = orchestrator.run();
    let (game, channel) = orchestrator.into_parts();
    let (_, out) = channel.into_inner();
    (result, game, String::from_utf8(out).expect("utf-8 transcript"))
}

/// Lines written for one turn without rejected input.
fn turn(transcript: &mut Vec<String>, board: &str, player: Player) {
    transcript.push(board.to_string());
    transcript.push(format!("{} move", player));
    transcript.push(PROMPT_X.to_string());
    transcript.push(PROMPT_Y.to_string());
}

fn joined<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().map(|l| format!("{}\n", l.as_ref())).collect()
}

fn input_for(moves: &[(i64, i64)]) -> String {
    moves.iter().map(|(r, c)| format!("{}\n{}\n", r, c)).collect()
}

#[test]
fn test_top_row_win_transcript() {
    let (result, game, out) = play(&input_for(&[(0, 0), (1, 0), (0, 1), (2, 0), (0, 2)]));

    let mut expected = vec![GREETING.to_string()];
    turn(&mut expected, EMPTY_BOARD, Player::X);
    turn(&mut expected, "[X][ ][ ]\n[ ][ ][ ]\n[ ][ ][ ]", Player::O);
    turn(&mut expected, "[X][ ][ ]\n[O][ ][ ]\n[ ][ ][ ]", Player::X);
    turn(&mut expected, "[X][X][ ]\n[O][ ][ ]\n[ ][ ][ ]", Player::O);
    turn(&mut expected, "[X][X][ ]\n[O][ ][ ]\n[O][ ][ ]", Player::X);
    expected.push("PlayerX has won!".to_string());

    assert_eq!(result.unwrap(), GameStatus::Won(Player::X));
    assert_eq!(out, joined(&expected));
    assert_eq!(game.render(), "[X][X][X]\n[O][ ][ ]\n[O][ ][ ]");
}

#[test]
fn test_draw_transcript() {
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 2),
        (1, 0),
        (2, 0),
        (1, 1),
        (2, 2),
        (2, 1),
    ];
    let (result, game, out) = play(&input_for(&moves));

    let mut shadow = Game::new();
    let mut expected = vec![GREETING.to_string()];
    for (row, col) in moves {
        turn(&mut expected, &shadow.render(), shadow.current_player());
        shadow.apply_move(row, col).unwrap();
    }
    expected.push("Draw".to_string());

    assert_eq!(result.unwrap(), GameStatus::Draw);
    assert_eq!(out, joined(&expected));
    assert!(out.contains("[X][O][X]\n[X][X][O]\n[O][ ][O]\nPlayerX move\n"));
    assert_eq!(game.render(), "[X][O][X]\n[X][X][O]\n[O][X][O]");
}

#[test]
fn test_bad_input_recovery() {
    let (result, game, out) = play("not a number\n1\n7\n1\n");

    let expected = [
        GREETING,
        EMPTY_BOARD,
        "PlayerX move",
        PROMPT_X,
        "Incorrect number format, please try again",
        PROMPT_X,
        PROMPT_Y,
        "Value outside of correct range, please try again",
        PROMPT_Y,
        "[ ][ ][ ]\n[ ][X][ ]\n[ ][ ][ ]",
        "PlayerO move",
        PROMPT_X,
    ];
    assert_eq!(out, joined(&expected));
    assert_eq!(
        result.unwrap_err(),
        ConsoleError::InputExhausted {
            axis: Axis::X,
            failures: 1
        }
    );
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_occupied_square_transcript() {
    let (_, game, out) = play("1\n1\n1\n1\n0\n0\n");

    let expected = [
        GREETING,
        EMPTY_BOARD,
        "PlayerX move",
        PROMPT_X,
        PROMPT_Y,
        "[ ][ ][ ]\n[ ][X][ ]\n[ ][ ][ ]",
        "PlayerO move",
        PROMPT_X,
        PROMPT_Y,
        "Filed already occupied, please try again",
        "PlayerO move",
        PROMPT_X,
        PROMPT_Y,
        "[O][ ][ ]\n[ ][X][ ]\n[ ][ ][ ]",
        "PlayerX move",
        PROMPT_X,
    ];
    assert_eq!(out, joined(&expected));
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_windows_line_endings() {
    let (result, _, _) = play("0\r\n0\r\n1\r\n0\r\n0\r\n1\r\n2\r\n0\r\n0\r\n2\r\n");
    assert_eq!(result.unwrap(), GameStatus::Won(Player::X));
}

#[test]
fn test_config_limit_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_read_failures = 3").unwrap();
    let config = ConsoleConfig::from_file(file.path()).unwrap();

    let channel = LineChannel::new(Cursor::new(String::new()), Vec::new());
    let mut orchestrator = Orchestrator::new(Game::new(), channel)
        .with_max_read_failures(*config.max_read_failures());

    assert!(matches!(
        orchestrator.run(),
        Err(ConsoleError::InputExhausted { failures: 3, .. })
    ));
    let (_, channel) = orchestrator.into_parts();
    let (_, out) = channel.into_inner();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.matches("Error reading input, please try again").count(), 2);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConsoleConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
