//! Error types for the game engine.

use super::types::Mark;
use derive_more::{Display, Error, From};
use tracing::instrument;

/// Player construction error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Construction error: {} at {}:{}", message, file, line)]
pub struct ConstructionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConstructionError {
    /// Creates a new construction error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Error raised by board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Coordinate outside `[0, 2]`.
    #[display("Coordinate ({}, {}) is off the board", x, y)]
    OutOfRange {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },

    /// Write refused because the cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied", x, y)]
    CellOccupied {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },
}

/// Error reading a move from the input collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// No more input will arrive.
    #[display("Input closed before the game finished")]
    Closed,

    /// Underlying reader failed.
    #[display("Failed to read input: {}", _0)]
    Io(#[error(not(source))] String),
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(err.to_string())
    }
}

/// Error raised by the game state machine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// Token outside `"1".."9"`.
    #[display("Invalid move {:?}: enter a number between 1 and 9", _0)]
    #[from(ignore)]
    InvalidMove(#[error(not(source))] String),

    /// Both players were given the same mark.
    #[display("Both players cannot play {}", _0)]
    #[from(ignore)]
    DuplicateMark(#[error(not(source))] Mark),

    /// A move was submitted after the game ended.
    #[display("Game is already over")]
    #[from(ignore)]
    Finished,

    /// Board rejected the move.
    #[display("{}", _0)]
    Board(BoardError),

    /// Input collaborator failed.
    #[display("{}", _0)]
    Input(InputError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_error_tracks_caller() {
        let err = ConstructionError::new("missing name");
        assert_eq!(err.message, "missing name");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().starts_with("Construction error: missing name at "));
    }

    #[test]
    fn test_board_error_converts_into_game_error() {
        let err: GameError = BoardError::OutOfRange { x: 3, y: 0 }.into();
        assert_eq!(err, GameError::Board(BoardError::OutOfRange { x: 3, y: 0 }));
        assert_eq!(err.to_string(), "Coordinate (3, 0) is off the board");
    }

    #[test]
    fn test_invalid_move_message() {
        let err = GameError::InvalidMove("0".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid move \"0\": enter a number between 1 and 9"
        );
    }
}
