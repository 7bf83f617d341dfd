//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};

/// One of the eight three-in-a-row lines.
///
/// Declaration order is the canonical scan order: rows top to bottom,
/// columns left to right, then the two diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum WinningLine {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    CenterColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    MainDiagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl WinningLine {
    /// All lines in canonical order.
    pub const ALL: [WinningLine; 8] = [
        WinningLine::TopRow,
        WinningLine::MiddleRow,
        WinningLine::BottomRow,
        WinningLine::LeftColumn,
        WinningLine::CenterColumn,
        WinningLine::RightColumn,
        WinningLine::MainDiagonal,
        WinningLine::AntiDiagonal,
    ];

    /// Board indices covered by this line.
    pub const fn cells(self) -> [usize; 3] {
        match self {
            WinningLine::TopRow => [0, 1, 2],
            WinningLine::MiddleRow => [3, 4, 5],
            WinningLine::BottomRow => [6, 7, 8],
            WinningLine::LeftColumn => [0, 3, 6],
            WinningLine::CenterColumn => [1, 4, 7],
            WinningLine::RightColumn => [2, 5, 8],
            WinningLine::MainDiagonal => [0, 4, 8],
            WinningLine::AntiDiagonal => [2, 4, 6],
        }
    }

    /// True if `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.cells().contains(&index)
    }

    /// True if all three cells hold `mark`.
    pub fn is_held_by(self, board: &Board, mark: Mark) -> bool {
        let cells = board.cells();
        self.cells()
            .iter()
            .all(|&i| cells[i] == Cell::Occupied(mark))
    }
}

/// First line held by `mark`, in canonical order.
pub fn winning_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    WinningLine::ALL
        .into_iter()
        .find(|line| line.is_held_by(board, mark))
}

/// Checks whether `mark` has three in a row anywhere.
pub fn has_win(board: &Board, mark: Mark) -> bool {
    WinningLine::ALL
        .iter()
        .any(|line| line.is_held_by(board, mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_win(&board, Mark::X));
        assert!(!has_win(&board, Mark::O));
    }

    #[test]
    fn test_every_line_detected() {
        for line in WinningLine::iter() {
            let mut board = Board::new();
            for index in line.cells() {
                board.place(index, Mark::O).unwrap();
            }
            assert!(has_win(&board, Mark::O), "{line:?}");
            assert!(!has_win(&board, Mark::X), "{line:?}");
            assert_eq!(winning_line(&board, Mark::O), Some(line));
        }
    }

    #[test]
    fn test_first_line_in_canonical_order() {
        // X holds the left column and the top row; the row comes first.
        let board: Board = "XXX/XOO/XO.".parse().unwrap();
        assert_eq!(winning_line(&board, Mark::X), Some(WinningLine::TopRow));

        // Middle column and anti diagonal share the center.
        let board: Board = "XOO/XOX/OO.".parse().unwrap();
        assert_eq!(winning_line(&board, Mark::O), Some(WinningLine::CenterColumn));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert!(!has_win(&board, Mark::X));
        assert_eq!(winning_line(&board, Mark::X), None);
    }

    #[test]
    fn test_contains() {
        assert!(WinningLine::AntiDiagonal.contains(6));
        assert!(!WinningLine::AntiDiagonal.contains(0));
    }
}
