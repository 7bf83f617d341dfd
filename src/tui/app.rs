//! Application state and key handling.

use super::input::{digit_to_index, move_cursor};
use crate::config::GameConfig;
use crate::session::{GameMode, GameSession};
use crossterm::event::KeyCode;
use strum::IntoEnumIterator;
use tictactoe_core::{Placement, Position};
use tracing::{debug, instrument};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    menu_index: usize,
    message: Option<String>,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            session: GameSession::new(config),
            cursor: Position::Center,
            menu_index: 0,
            message: None,
        }
    }

    /// Gets the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Highlighted entry of the mode menu.
    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    /// Last move or error message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True while the mode menu is shown.
    pub fn in_menu(&self) -> bool {
        self.session.mode().is_none()
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            debug!("User quit");
            return Control::Quit;
        }

        if self.in_menu() {
            self.handle_menu_key(key);
        } else {
            self.handle_game_key(key);
        }
        Control::Continue
    }

    fn handle_menu_key(&mut self, key: KeyCode) {
        let count = GameMode::iter().count();
        match key {
            KeyCode::Up => self.menu_index = self.menu_index.saturating_sub(1),
            KeyCode::Down => self.menu_index = (self.menu_index + 1).min(count - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(mode) = GameMode::iter().nth(self.menu_index) {
                    self.start(mode);
                }
            }
            KeyCode::Char('h') => self.start(GameMode::HumanVsHuman),
            KeyCode::Char('a') => self.start(GameMode::HumanVsAi),
            _ => {
                if let Some(mode) = digit_to_index(key).and_then(|i| GameMode::iter().nth(i)) {
                    self.start(mode);
                }
            }
        }
    }

    fn handle_game_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char('r') => {
                let placements = self.session.restart();
                self.message = Some(describe("Game restarted.", &placements));
            }
            KeyCode::Char('m') => {
                self.session.return_to_mode_selection();
                self.message = None;
            }
            _ => {
                if let Some(index) = digit_to_index(key) {
                    if let Some(position) = Position::from_index(index) {
                        self.cursor = position;
                    }
                    self.play(index);
                }
            }
        }
    }

    fn start(&mut self, mode: GameMode) {
        let placements = self.session.select_mode(mode);
        self.cursor = Position::Center;
        self.message = Some(describe(mode.name(), &placements));
    }

    fn play(&mut self, index: usize) {
        self.message = Some(match self.session.play(index) {
            Ok(placements) => describe("", &placements),
            Err(e) => e.to_string(),
        });
    }
}

/// Joins `prefix` with a sentence per placement.
fn describe(prefix: &str, placements: &[Placement]) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !prefix.is_empty() {
        parts.push(prefix.to_string());
    }
    for placement in placements {
        let cell = placement
            .position()
            .map_or_else(|| placement.index.to_string(), |p| p.label().to_string());
        parts.push(format!("{} played {}.", placement.mark, cell));
    }
    parts.join(" ")
}
