//! Classification of a board snapshot.

use super::{WinningLine, is_full, winning_line};
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Moves remain and nobody has a line.
    Ongoing,
    /// `mark` holds `line`.
    Win {
        /// Winning mark.
        mark: Mark,
        /// First winning line in canonical order.
        line: WinningLine,
    },
    /// Board is full with no winner.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<WinningLine> {
        match self {
            GameOutcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// True once the game has concluded.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "Ongoing"),
            GameOutcome::Win { mark, line } => write!(f, "Player {} wins ({:?})", mark, line),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies `board`.
///
/// X is checked before O. A board where both hold a line cannot arise in
/// legal play and reports X.
#[instrument(level = "trace", skip(board), fields(occupied = board.occupied_count()))]
pub fn evaluate(board: &Board) -> GameOutcome {
    for mark in [Mark::X, Mark::O] {
        if let Some(line) = winning_line(board, mark) {
            return GameOutcome::Win { mark, line };
        }
    }

    if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}
