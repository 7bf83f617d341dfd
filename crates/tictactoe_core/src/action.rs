//! Placements and the errors raised when applying them.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A mark placed on a cell: one accepted move of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Placement {
    /// The mark that was placed.
    pub mark: Mark,
    /// Board index (0-8).
    pub index: usize,
}

impl Placement {
    /// Named position of this placement, if the index is on the board.
    pub fn position(&self) -> Option<Position> {
        Position::from_index(self.index)
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(position) => write!(f, "{} -> {}", self.mark, position.label()),
            None => write!(f, "{} -> #{}", self.mark, self.index),
        }
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index is not on the board.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// No game mode has been chosen yet.
    #[display("Select a mode to start playing")]
    NoModeSelected,

    /// It's the other side's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Mark),
}

impl std::error::Error for MoveError {}

/// Error produced when parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character that is neither a mark nor an empty marker.
    #[display("Invalid cell character {:?}", _0)]
    InvalidChar(char),
}

impl std::error::Error for BoardParseError {}
