//! Unbeatable tic-tac-toe.
//!
//! The rules and the minimax engine live in [`tictactoe_core`]. This crate
//! adds what a playable game needs around them:
//!
//! # Architecture
//!
//! - **Session**: mode selection, turn order, move validation and the AI
//!   reply ([`GameSession`])
//! - **Config**: TOML settings with defaults ([`GameConfig`])
//! - **CLI**: headless commands for scripting the engine
//! - **TUI**: a terminal front end built on ratatui
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameConfig, GameMode, GameSession};
//!
//! let mut session = GameSession::new(&GameConfig::default());
//! session.select_mode(GameMode::HumanVsAi);
//! let placements = session.play(4)?;
//! assert_eq!(placements.len(), 2);
//! # Ok::<(), tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod session;
pub mod tui;

pub use config::{ConfigError, GameConfig};
pub use session::{GameMode, GameSession};

pub use tictactoe_core::{
    Board, GameOutcome, Mark, MoveError, Placement, Position, ScoredMove, WinningLine, evaluate,
    select_move,
};
