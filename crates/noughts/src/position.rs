//! Named squares and the mapping between move tokens and coordinates.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the board, numbered 1-9 for players.
///
/// Numbering is row-major: the top row is 1 2 3, the bottom row 7 8 9.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (move 1)
    TopLeft,
    /// Top-center (move 2)
    TopCenter,
    /// Top-right (move 3)
    TopRight,
    /// Middle-left (move 4)
    MiddleLeft,
    /// Center (move 5)
    Center,
    /// Middle-right (move 6)
    MiddleRight,
    /// Bottom-left (move 7)
    BottomLeft,
    /// Bottom-center (move 8)
    BottomCenter,
    /// Bottom-right (move 9)
    BottomRight,
}

impl Position {
    /// Converts position to board index (0-8), following declaration order.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Column and row of this square.
    pub fn coords(self) -> (usize, usize) {
        let index = self.to_index();
        (index % 3, index / 3)
    }

    /// Creates position from column and row.
    pub fn from_coords(x: usize, y: usize) -> Option<Self> {
        if x > 2 || y > 2 {
            return None;
        }
        Self::from_index(y * 3 + x)
    }

    /// The number a player types to pick this square.
    pub fn token(self) -> u8 {
        self.to_index() as u8 + 1
    }

    /// Parses a move token `"1"` through `"9"`.
    ///
    /// Leading and trailing whitespace is ignored. Anything else,
    /// including `"0"`, `"10"` or `"+1"`, yields `None`.
    #[instrument]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "1" => Some(Position::TopLeft),
            "2" => Some(Position::TopCenter),
            "3" => Some(Position::TopRight),
            "4" => Some(Position::MiddleLeft),
            "5" => Some(Position::Center),
            "6" => Some(Position::MiddleRight),
            "7" => Some(Position::BottomLeft),
            "8" => Some(Position::BottomCenter),
            "9" => Some(Position::BottomRight),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_map_row_major() {
        assert_eq!(Position::from_token("1").map(Position::coords), Some((0, 0)));
        assert_eq!(Position::from_token("2").map(Position::coords), Some((1, 0)));
        assert_eq!(Position::from_token("4").map(Position::coords), Some((0, 1)));
        assert_eq!(Position::from_token("5").map(Position::coords), Some((1, 1)));
        assert_eq!(Position::from_token("9").map(Position::coords), Some((2, 2)));
    }

    #[test]
    fn test_token_round_trip_over_all_squares() {
        for pos in Position::iter() {
            let token = pos.token().to_string();
            assert_eq!(Position::from_token(&token), Some(pos));
            let (x, y) = pos.coords();
            assert_eq!(Position::from_coords(x, y), Some(pos));
        }
    }

    #[test]
    fn test_index_follows_iteration_order() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_rejects_unknown_tokens() {
        for token in ["", "0", "10", "a", "+1", "1.0", "one"] {
            assert_eq!(Position::from_token(token), None, "token {token:?}");
        }
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(Position::from_token(" 7\n"), Some(Position::BottomLeft));
    }

    #[test]
    fn test_from_coords_out_of_range() {
        assert_eq!(Position::from_coords(3, 0), None);
        assert_eq!(Position::from_coords(0, 3), None);
    }
}
