//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Mark a player places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Crosses.
    X,
    /// Noughts.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single slot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns true if no mark has been placed.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Glyph for display, falling back to `empty` for unoccupied cells.
    pub fn glyph(self, empty: char) -> char {
        match self {
            Cell::Empty => empty,
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Occupied(mark)
    }
}

/// Board evaluation, recomputed from the cells on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalState {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// A line holds three equal marks.
    Winner(Mark),
    /// Every cell is filled and no line is uniform.
    Draw,
}

impl TerminalState {
    /// Returns true for `Winner` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, TerminalState::InProgress)
    }

    /// Converts a terminal state into a game outcome.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            TerminalState::InProgress => None,
            TerminalState::Winner(mark) => Some(Outcome::Winner(mark)),
            TerminalState::Draw => Some(Outcome::Draw),
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Mark that completed a line.
    Winner(Mark),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players seated, no move requested yet.
    NotStarted,
    /// At least one move has been requested and the board is not terminal.
    InProgress,
    /// Terminal state reached.
    Finished(Outcome),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent().opponent(), Mark::O);
    }

    #[test]
    fn test_cell_glyphs() {
        assert_eq!(Cell::Empty.glyph('_'), '_');
        assert_eq!(Cell::from(Mark::X).glyph('_'), 'X');
        assert_eq!(Cell::Occupied(Mark::O).glyph('.'), 'O');
    }

    #[test]
    fn test_terminal_state_outcome() {
        assert_eq!(TerminalState::InProgress.outcome(), None);
        assert_eq!(
            TerminalState::Winner(Mark::O).outcome(),
            Some(Outcome::Winner(Mark::O))
        );
        assert!(TerminalState::Draw.is_terminal());
    }
}
