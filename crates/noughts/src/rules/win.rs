//! Win detection logic for tic-tac-toe.

use super::lines::all_same;
use crate::board::Board;
use crate::types::Mark;
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line, in row, column, diagonal
/// order, that holds three equal marks. `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    board
        .lines()
        .iter()
        .find(|line| all_same(line.as_slice()))
        .and_then(|line| line[0].mark())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        for x in 0..3 {
            board.set(x, 0, Mark::X).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(2, 0, Mark::O).unwrap();
        board.set(1, 1, Mark::O).unwrap();
        board.set(0, 2, Mark::O).unwrap();
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(0, 0, Mark::X).unwrap();
        board.set(1, 0, Mark::X).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(0, 1, Mark::X).unwrap();
        board.set(1, 1, Mark::O).unwrap();
        board.set(2, 1, Mark::X).unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
