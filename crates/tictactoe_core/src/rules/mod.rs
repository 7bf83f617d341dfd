//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. The search calls these at every
//! node, so none of them allocate.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::{evaluate, GameOutcome};
pub use win::{has_win, winning_line, WinningLine};
