//! Command-line interface for tictactoe.

use crate::session::GameMode;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tictactoe_core::{Board, GameOutcome, Mark, Placement, ScoredMove, evaluate, select_move};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe against a minimax engine that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Unbeatable tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it is missing)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Skip the mode menu and start in this mode
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,
    },

    /// Print the engine's move for a board
    BestMove {
        /// Nine cells, row by row: X, O, and . for empty (`/` may separate rows)
        board: Board,

        /// Mark to move
        #[arg(short, long, default_value = "O")]
        mark: Mark,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Classify a board as ongoing, won or drawn
    Evaluate {
        /// Nine cells, row by row: X, O, and . for empty (`/` may separate rows)
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides from an empty board
    SelfPlay {
        /// Mark that opens the game
        #[arg(short, long, default_value = "X")]
        first: Mark,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Engine answer for one board.
#[derive(Debug, Clone, Serialize)]
pub struct BestMoveReport {
    /// Board that was searched.
    pub board: Board,
    /// Mark to move.
    pub mark: Mark,
    /// Chosen cell, absent for a finished board.
    pub chosen: Option<ScoredMove>,
}

impl std::fmt::Display for BestMoveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}\n", self.board)?;
        match self.chosen {
            Some(chosen) => write!(
                f,
                "{} plays {} (score {})",
                self.mark, chosen.index, chosen.score
            ),
            None => write!(f, "No move: the game is over"),
        }
    }
}

/// Classification of one board.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluateReport {
    /// Board that was classified.
    pub board: Board,
    /// Its outcome.
    pub outcome: GameOutcome,
}

impl std::fmt::Display for EvaluateReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\n{}", self.board, self.outcome)
    }
}

/// Record of an engine-vs-engine game.
#[derive(Debug, Clone, Serialize)]
pub struct SelfPlayReport {
    /// Mark that opened.
    pub first: Mark,
    /// Every placement in order.
    pub placements: Vec<Placement>,
    /// Final board.
    pub board: Board,
    /// Final outcome.
    pub outcome: GameOutcome,
}

impl std::fmt::Display for SelfPlayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (ply, placement) in self.placements.iter().enumerate() {
            writeln!(f, "{:>2}. {}", ply + 1, placement)?;
        }
        write!(f, "\n{}\n\n{}", self.board, self.outcome)
    }
}

/// Runs the engine on `board`.
#[instrument(skip(board))]
pub fn best_move(board: Board, mark: Mark) -> BestMoveReport {
    BestMoveReport {
        board,
        mark,
        chosen: select_move(&board, mark),
    }
}

/// Classifies `board`.
#[instrument(skip(board))]
pub fn evaluate_report(board: Board) -> EvaluateReport {
    let outcome = evaluate(&board);
    debug!(%outcome, "Board evaluated");
    EvaluateReport { board, outcome }
}

/// Plays the engine against itself until the game ends.
#[instrument]
pub fn self_play(first: Mark) -> SelfPlayReport {
    let mut board = Board::new();
    let mut to_move = first;
    let mut placements = Vec::new();

    while let Some(chosen) = select_move(&board, to_move) {
        if let Err(e) = board.place(chosen.index, to_move) {
            warn!(error = %e, "Engine move rejected");
            break;
        }
        let placement = Placement::new(to_move, chosen.index);
        debug!(%placement, score = chosen.score, "Self-play move");
        placements.push(placement);
        to_move = to_move.opponent();
    }

    SelfPlayReport {
        first,
        placements,
        board,
        outcome: evaluate(&board),
    }
}

/// Renders `value` as text or pretty JSON.
pub fn render<T: Serialize + std::fmt::Display>(value: &T, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(value.to_string())
    }
}
