//! Tests for board evaluation over every possible cell assignment.

use tictactoe_core::{Board, Cell, GameOutcome, Mark, WinningLine, evaluate, has_win, is_full};

/// All 3^9 boards, legal or not.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut cells = [Cell::Empty; 9];
        for cell in cells.iter_mut() {
            *cell = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::Occupied(Mark::X),
                _ => Cell::Occupied(Mark::O),
            };
            code /= 3;
        }
        Board::from_cells(cells)
    })
}

fn lines_held_by(board: &Board, mark: Mark) -> Vec<WinningLine> {
    WinningLine::ALL
        .into_iter()
        .filter(|line| {
            line.cells()
                .iter()
                .all(|&i| board.get(i) == Some(Cell::Occupied(mark)))
        })
        .collect()
}

#[test]
fn test_single_winner_reports_first_line() {
    for board in all_boards() {
        let x_lines = lines_held_by(&board, Mark::X);
        let o_lines = lines_held_by(&board, Mark::O);

        let expected = match (x_lines.first(), o_lines.first()) {
            (Some(&line), None) => GameOutcome::Win { mark: Mark::X, line },
            (None, Some(&line)) => GameOutcome::Win { mark: Mark::O, line },
            // Both marks winning is not a legal position.
            (Some(_), Some(_)) => continue,
            (None, None) if board.empty_cells().next().is_none() => GameOutcome::Draw,
            (None, None) => GameOutcome::Ongoing,
        };

        assert_eq!(evaluate(&board), expected, "board:\n{board}");
        assert_eq!(has_win(&board, Mark::X), !x_lines.is_empty());
        assert_eq!(has_win(&board, Mark::O), !o_lines.is_empty());
    }
}

#[test]
fn test_full_iff_no_empty_cell() {
    for board in all_boards() {
        assert_eq!(is_full(&board), board.occupied_count() == 9);
    }
}

#[test]
fn test_evaluate_is_idempotent() {
    for board in all_boards() {
        let snapshot = board;
        assert_eq!(evaluate(&board), evaluate(&board));
        assert_eq!(board, snapshot);
    }
}

#[test]
fn test_outcome_serializes() {
    let board: Board = "OOO/XX./X..".parse().unwrap();
    let outcome = evaluate(&board);
    let json = serde_json::to_string(&outcome).unwrap();
    let back: GameOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, outcome);
    assert_eq!(back.line(), Some(WinningLine::TopRow));
}
