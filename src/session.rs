//! Game session: the state a front end drives between moves.
//!
//! The session owns the board and applies accepted moves. Rules and move
//! choice come from `tictactoe_core`; each accepted move runs
//! apply → evaluate → (AI mode) select → apply → evaluate.

use crate::config::GameConfig;
use serde::{Deserialize, Serialize};
use tictactoe_core::{
    Board, GameOutcome, Mark, MoveError, Placement, WinningLine, evaluate, select_move,
};
use tracing::{debug, info, instrument, warn};

/// Who sits on the other side of the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Two people share the keyboard.
    #[value(name = "human")]
    HumanVsHuman,
    /// One person plays the minimax engine.
    #[value(name = "ai")]
    HumanVsAi,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsAi => "Human vs AI",
        }
    }
}

/// One game of tic-tac-toe plus the mode it is played in.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current: Mark,
    active: bool,
    mode: Option<GameMode>,
    ai_mark: Mark,
    first_mark: Mark,
    outcome: GameOutcome,
}

impl GameSession {
    /// Creates a session from configuration.
    ///
    /// Starts in the configured default mode, or waits for a mode choice.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        let mut session = Self {
            board: Board::new(),
            current: *config.first_mark(),
            active: true,
            mode: None,
            ai_mark: *config.ai_mark(),
            first_mark: *config.first_mark(),
            outcome: GameOutcome::Ongoing,
        };
        if let Some(mode) = *config.default_mode() {
            session.select_mode(mode);
        }
        session
    }

    /// Sets the mode and starts a fresh game.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, mode: GameMode) -> Vec<Placement> {
        info!(mode = mode.name(), "Mode selected");
        self.mode = Some(mode);
        self.restart()
    }

    /// Clears the board and gives the move to the opening mark.
    ///
    /// When the engine owns the opening mark it plays straight away; its
    /// placement is returned.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Vec<Placement> {
        debug!("Restarting game");
        self.board = Board::new();
        self.current = self.first_mark;
        self.active = true;
        self.outcome = GameOutcome::Ongoing;

        let mut placements = Vec::new();
        if self.is_ai_turn() {
            self.play_ai(&mut placements);
        }
        placements
    }

    /// Drops the mode; play is blocked until a new one is selected.
    #[instrument(skip(self))]
    pub fn return_to_mode_selection(&mut self) {
        self.mode = None;
        self.restart();
    }

    /// Plays the current mark at `index`, then lets the engine answer in
    /// AI mode.
    ///
    /// Returns every placement made, the caller's first.
    ///
    /// # Errors
    ///
    /// Rejected moves leave the session unchanged.
    #[instrument(skip(self), fields(current = %self.current))]
    pub fn play(&mut self, index: usize) -> Result<Vec<Placement>, MoveError> {
        if self.mode.is_none() {
            return Err(MoveError::NoModeSelected);
        }
        if !self.active {
            return Err(MoveError::GameOver);
        }
        if self.is_ai_turn() {
            return Err(MoveError::NotYourTurn(self.current));
        }

        let mut placements = Vec::with_capacity(2);
        placements.push(self.apply(index)?);

        if self.is_ai_turn() {
            self.play_ai(&mut placements);
        }

        Ok(placements)
    }

    /// Places the current mark, re-evaluates and passes the turn.
    fn apply(&mut self, index: usize) -> Result<Placement, MoveError> {
        let mark = self.current;
        self.board.place(index, mark)?;
        let placement = Placement::new(mark, index);
        debug!(%placement, "Move applied");

        self.outcome = evaluate(&self.board);
        if self.outcome.is_over() {
            info!(outcome = %self.outcome, "Game over");
            self.active = false;
        } else {
            self.current = mark.opponent();
        }

        Ok(placement)
    }

    fn play_ai(&mut self, placements: &mut Vec<Placement>) {
        let Some(chosen) = select_move(&self.board, self.ai_mark) else {
            warn!("Engine found no move on an active board");
            return;
        };
        match self.apply(chosen.index) {
            Ok(placement) => placements.push(placement),
            Err(e) => warn!(error = %e, "Engine move rejected"),
        }
    }

    fn is_ai_turn(&self) -> bool {
        self.mode == Some(GameMode::HumanVsAi) && self.active && self.current == self.ai_mark
    }

    /// Status line shown under the board.
    pub fn status(&self) -> String {
        if self.mode.is_none() {
            return "Select a mode to start playing".to_string();
        }
        match self.outcome {
            GameOutcome::Win { mark, .. } => format!("Player {} has won!", mark),
            GameOutcome::Draw => "It's a draw!".to_string(),
            GameOutcome::Ongoing => format!("It's {}'s turn", self.current),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move next (the last mover once the game is over).
    pub fn current_mark(&self) -> Mark {
        self.current
    }

    /// True until the game is won or drawn.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the selected mode.
    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    /// Mark played by the engine in AI mode.
    pub fn ai_mark(&self) -> Mark {
        self.ai_mark
    }

    /// Outcome after the last accepted move.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Line to highlight, if the game was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.outcome.line()
    }
}
