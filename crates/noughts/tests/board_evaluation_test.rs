//! Tests for board evaluation over hand-built arrangements.

use noughts::{Board, Cell, Mark, TerminalState};

const E: Cell = Cell::Empty;
const X: Cell = Cell::Occupied(Mark::X);
const O: Cell = Cell::Occupied(Mark::O);

fn winner(rows: [[Cell; 3]; 3]) -> TerminalState {
    Board::from_rows(rows).evaluate()
}

#[test]
fn test_empty_board_in_progress() {
    assert_eq!(Board::new().evaluate(), TerminalState::InProgress);
}

#[test]
fn test_partial_board_in_progress() {
    let state = winner([[X, O, E], [E, X, E], [O, E, E]]);
    assert_eq!(state, TerminalState::InProgress);
}

#[test]
fn test_top_row() {
    assert_eq!(winner([[X, X, X], [O, O, E], [E, E, E]]), TerminalState::Winner(Mark::X));
}

#[test]
fn test_middle_row() {
    assert_eq!(winner([[X, X, E], [O, O, O], [X, E, E]]), TerminalState::Winner(Mark::O));
}

#[test]
fn test_bottom_row() {
    assert_eq!(winner([[O, O, E], [E, E, E], [X, X, X]]), TerminalState::Winner(Mark::X));
}

#[test]
fn test_left_column() {
    assert_eq!(winner([[O, X, E], [O, X, E], [O, E, X]]), TerminalState::Winner(Mark::O));
}

#[test]
fn test_middle_column() {
    assert_eq!(winner([[O, X, E], [E, X, O], [E, X, E]]), TerminalState::Winner(Mark::X));
}

#[test]
fn test_right_column() {
    assert_eq!(winner([[X, E, O], [X, E, O], [E, E, O]]), TerminalState::Winner(Mark::O));
}

#[test]
fn test_main_diagonal() {
    assert_eq!(winner([[X, O, E], [O, X, E], [E, E, X]]), TerminalState::Winner(Mark::X));
}

#[test]
fn test_anti_diagonal() {
    assert_eq!(winner([[X, X, O], [E, O, E], [O, E, X]]), TerminalState::Winner(Mark::O));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let state = winner([[X, O, X], [X, O, O], [O, X, X]]);
    assert_eq!(state, TerminalState::Draw);
}

#[test]
fn test_full_board_with_line_is_winner() {
    // X X X / O O X / X O O
    let state = winner([[X, X, X], [O, O, X], [X, O, O]]);
    assert_eq!(state, TerminalState::Winner(Mark::X));
}

#[test]
fn test_draw_requires_every_cell() {
    // Same as the draw above with the last cell left open.
    let state = winner([[X, O, X], [X, O, O], [O, X, E]]);
    assert_eq!(state, TerminalState::InProgress);
}

#[test]
fn test_board_snapshot_serializes() {
    let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
    let json = serde_json::to_string(&board).expect("Serialize failed");
    let back: Board = serde_json::from_str(&json).expect("Deserialize failed");
    assert_eq!(back, board);
}
