//! The 3x3 grid and coordinate access.

use super::error::BoardError;
use super::position::Position;
use super::rules;
use super::types::{Cell, Mark, TerminalState};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Glyph shown for empty cells unless the board is told otherwise.
pub const DEFAULT_EMPTY_GLYPH: char = '_';

/// What `Board::set` does when the target cell already holds a mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Replace whatever is there.
    #[default]
    #[display("allow")]
    Allow,
    /// Refuse with `BoardError::CellOccupied`.
    #[display("reject")]
    Reject,
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][column]`.
    grid: [[Cell; 3]; 3],
    policy: OverwritePolicy,
    empty_glyph: char,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::from_rows([[Cell::Empty; 3]; 3])
    }

    /// Creates a board from a prepared arrangement, outer index is the row.
    pub fn from_rows(grid: [[Cell; 3]; 3]) -> Self {
        Self {
            grid,
            policy: OverwritePolicy::default(),
            empty_glyph: DEFAULT_EMPTY_GLYPH,
        }
    }

    /// Sets how writes onto occupied cells are treated.
    pub fn with_policy(mut self, policy: OverwritePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the placeholder glyph used when rendering empty cells.
    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.empty_glyph = glyph;
        self
    }

    /// Returns the overwrite policy.
    pub fn policy(&self) -> OverwritePolicy {
        self.policy
    }

    /// Returns the cell at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, BoardError> {
        self.grid
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .ok_or(BoardError::OutOfRange { x, y })
    }

    /// Places `mark` at column `x`, row `y`.
    ///
    /// Occupied cells are overwritten unless the policy is
    /// [`OverwritePolicy::Reject`].
    #[instrument(skip(self), fields(policy = %self.policy))]
    pub fn set(&mut self, x: usize, y: usize, mark: Mark) -> Result<(), BoardError> {
        let current = self.get(x, y)?;
        if !current.is_empty() && self.policy == OverwritePolicy::Reject {
            return Err(BoardError::CellOccupied { x, y });
        }
        trace!(?current, "Writing cell");
        self.grid[y][x] = Cell::Occupied(mark);
        Ok(())
    }

    /// Returns the cell at a named position.
    pub fn at(&self, pos: Position) -> Cell {
        let (x, y) = pos.coords();
        self.grid[y][x]
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.grid
    }

    /// All nine cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.grid.iter().flatten().copied()
    }

    /// The eight candidate lines: rows, columns, then both diagonals.
    pub fn lines(&self) -> [[Cell; 3]; 8] {
        rules::LINES.map(|line| line.map(|pos| self.at(pos)))
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Evaluates the board. A winning line takes precedence over a full board.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> TerminalState {
        if let Some(mark) = rules::check_winner(self) {
            TerminalState::Winner(mark)
        } else if self.is_full() {
            TerminalState::Draw
        } else {
            TerminalState::InProgress
        }
    }

    /// Formats the board as one text line per row.
    pub fn render(&self) -> String {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.glyph(self.empty_glyph).to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
