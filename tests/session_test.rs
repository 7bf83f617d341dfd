//! Tests for the game session: the call sequence a front end drives.

use tictactoe::{
    GameConfig, GameMode, GameOutcome, GameSession, Mark, MoveError, Placement, WinningLine,
};

fn session(mode: GameMode) -> GameSession {
    let mut session = GameSession::new(&GameConfig::default());
    session.select_mode(mode);
    session
}

#[test]
fn test_human_vs_human_win_highlights_line() {
    let mut session = session(GameMode::HumanVsHuman);
    for index in [0, 3, 1, 4, 2] {
        session.play(index).unwrap();
    }

    assert!(!session.is_active());
    assert_eq!(
        session.outcome(),
        GameOutcome::Win {
            mark: Mark::X,
            line: WinningLine::TopRow,
        }
    );
    assert_eq!(session.winning_line(), Some(WinningLine::TopRow));
    assert_eq!(session.status(), "Player X has won!");
    assert_eq!(session.play(8), Err(MoveError::GameOver));
}

#[test]
fn test_human_vs_human_draw() {
    let mut session = session(GameMode::HumanVsHuman);
    // X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        session.play(index).unwrap();
    }
    assert_eq!(session.outcome(), GameOutcome::Draw);
    assert_eq!(session.status(), "It's a draw!");
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut session = session(GameMode::HumanVsHuman);
    assert_eq!(session.play(9), Err(MoveError::OutOfBounds(9)));
    assert_eq!(session.board().occupied_count(), 0);
    assert_eq!(session.current_mark(), Mark::X);
}

#[test]
fn test_ai_blocks_top_row() {
    let mut session = session(GameMode::HumanVsAi);
    // X center is answered at 0 (first tied cell).
    let reply = session.play(4).unwrap();
    assert_eq!(reply, vec![Placement::new(Mark::X, 4), Placement::new(Mark::O, 0)]);

    // X threatens 3-4-5; O must take 5.
    let reply = session.play(3).unwrap();
    assert_eq!(reply[1], Placement::new(Mark::O, 5));
}

#[test]
fn test_human_cannot_beat_ai() {
    // Greedy human: always the lowest free cell.
    let mut session = session(GameMode::HumanVsAi);
    while session.is_active() {
        let index = session.board().empty_cells().next().unwrap();
        session.play(index).unwrap();
    }
    assert_ne!(session.outcome().winner(), Some(Mark::X));
}

#[test]
fn test_ai_opens_when_it_moves_first() {
    let config =
        GameConfig::from_toml("ai_mark = \"X\"\ndefault_mode = \"human_vs_ai\"\n").unwrap();
    let session = GameSession::new(&config);
    assert_eq!(session.board().occupied_count(), 1);
    assert_eq!(session.current_mark(), Mark::O);
    assert_eq!(session.status(), "It's O's turn");
}

#[test]
fn test_restart_clears_board() {
    let mut session = session(GameMode::HumanVsHuman);
    session.play(0).unwrap();
    assert!(session.restart().is_empty());
    assert_eq!(session.board().occupied_count(), 0);
    assert_eq!(session.current_mark(), Mark::X);
    assert!(session.is_active());
}

#[test]
fn test_mode_selection_round_trip() {
    let mut session = session(GameMode::HumanVsAi);
    session.play(0).unwrap();
    session.return_to_mode_selection();
    assert_eq!(session.mode(), None);
    assert_eq!(session.board().occupied_count(), 0);
    assert_eq!(session.play(0), Err(MoveError::NoModeSelected));

    session.select_mode(GameMode::HumanVsHuman);
    assert_eq!(session.play(0).unwrap().len(), 1);
}
