//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board or a single line of cells. Rules are kept
//! apart from board storage so evaluation can be tested on hand-built
//! arrangements.

mod draw;
mod lines;
mod win;

pub use draw::{is_draw, is_full};
pub use lines::{LINES, all_empty, all_same, any_empty, none_empty};
pub use win::check_winner;
