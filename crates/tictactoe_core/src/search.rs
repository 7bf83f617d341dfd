//! Exhaustive minimax move selection.
//!
//! Scores are always from O's point of view: O maximizes, X minimizes.
//! There is no depth discount, so every won position scores the same no
//! matter how far away the win is. Among equal scores the lowest cell index
//! wins, which keeps the engine deterministic.

use crate::rules::{has_win, is_full};
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game-theoretic value of a position.
pub type Score = i32;

/// X has won.
pub const X_WINS: Score = -10;
/// Neither side can force a win.
pub const DRAW: Score = 0;
/// O has won.
pub const O_WINS: Score = 10;

/// A candidate cell and the score it leads to under optimal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct ScoredMove {
    /// Board index (0-8) to play.
    pub index: usize,
    /// Score reached by playing `index`.
    pub score: Score,
}

/// Score of a finished board, `None` while play continues.
fn terminal_score(board: &Board) -> Option<Score> {
    if has_win(board, Mark::X) {
        Some(X_WINS)
    } else if has_win(board, Mark::O) {
        Some(O_WINS)
    } else if is_full(board) {
        Some(DRAW)
    } else {
        None
    }
}

#[derive(Debug, Default)]
struct Search {
    nodes: u64,
}

impl Search {
    /// Scores every empty cell in ascending order and keeps the first
    /// strict improvement for `to_move`.
    fn best(&mut self, board: &Board, to_move: Mark) -> Option<ScoredMove> {
        let mut best: Option<ScoredMove> = None;

        for index in board.empty_cells() {
            let child = board.with(index, to_move);
            let score = self.score(&child, to_move.opponent());

            let improves = match best {
                None => true,
                Some(current) if to_move.is_maximizer() => score > current.score,
                Some(current) => score < current.score,
            };
            if improves {
                best = Some(ScoredMove::new(index, score));
            }
        }

        best
    }

    fn score(&mut self, board: &Board, to_move: Mark) -> Score {
        self.nodes += 1;

        if let Some(score) = terminal_score(board) {
            return score;
        }

        // A board that is not terminal still has an empty cell.
        self.best(board, to_move).map_or(DRAW, |m| m.score)
    }
}

/// Picks the optimal cell for `to_move`.
///
/// Returns `None` when the board is already decided or full; callers are
/// expected to check [`crate::evaluate`] first. `board` is only read; every
/// probe runs on its own copy.
#[instrument(skip(board), fields(occupied = board.occupied_count()))]
pub fn select_move(board: &Board, to_move: Mark) -> Option<ScoredMove> {
    if terminal_score(board).is_some() {
        debug!("Board is terminal, no move to select");
        return None;
    }

    let mut search = Search::default();
    let chosen = search.best(board, to_move);

    if let Some(chosen) = chosen {
        debug!(
            index = chosen.index,
            score = chosen.score,
            nodes = search.nodes,
            "Move selected"
        );
    }

    chosen
}

/// Value of `board` with `to_move` to play, assuming optimal play from
/// both sides.
pub fn score_position(board: &Board, to_move: Mark) -> Score {
    Search::default().score(board, to_move)
}
