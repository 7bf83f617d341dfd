//! Pure tic-tac-toe game logic.
//!
//! Two entry points serve any front end:
//!
//! - [`evaluate`] classifies a board as ongoing, won (with the line) or drawn.
//! - [`select_move`] runs an exhaustive minimax search and returns the
//!   optimal cell for the mark to move.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, GameOutcome, Mark, evaluate, select_move};
//!
//! let board: Board = "XX./.O./..O".parse()?;
//! let chosen = select_move(&board, Mark::O).expect("board has empty cells");
//! assert_eq!(chosen.index, 2);
//! assert_eq!(evaluate(&board), GameOutcome::Ongoing);
//! # Ok::<(), tictactoe_core::BoardParseError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
pub mod rules;
mod search;
mod types;

pub use action::{BoardParseError, MoveError, Placement};
pub use position::Position;
pub use rules::{GameOutcome, WinningLine, evaluate, has_win, is_full, winning_line};
pub use search::{DRAW, O_WINS, Score, ScoredMove, X_WINS, score_position, select_move};
pub use types::{Board, CELL_COUNT, Cell, Mark};
