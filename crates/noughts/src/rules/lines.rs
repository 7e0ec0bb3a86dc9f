//! Winning lines and predicates over a sequence of cells.

use crate::position::Position;
use crate::types::Cell;

/// The eight lines that win the game.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// True if no cell holds a mark. Vacuously true for an empty slice.
pub fn all_empty(cells: &[Cell]) -> bool {
    cells.iter().all(|c| c.is_empty())
}

/// True if every cell holds the same mark.
///
/// Empty cells never count as "the same": a blank line is not uniform.
pub fn all_same(cells: &[Cell]) -> bool {
    match cells.split_first() {
        Some((first, rest)) => !first.is_empty() && rest.iter().all(|c| c == first),
        None => false,
    }
}

/// True if at least one cell is empty.
pub fn any_empty(cells: &[Cell]) -> bool {
    cells.iter().any(|c| c.is_empty())
}

/// True if every cell holds a mark.
pub fn none_empty(cells: &[Cell]) -> bool {
    !any_empty(cells)
}
