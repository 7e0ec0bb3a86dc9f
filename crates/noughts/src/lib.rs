//! Noughts - a tic-tac-toe engine for text front ends
//!
//! The crate owns the rules and the turn loop; front ends plug in
//! through two small traits.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid with coordinate access and win/draw evaluation
//! - **Rules**: line predicates and winner/draw checks over a board
//! - **Player**: immutable name + mark
//! - **Game**: turn alternation, move translation and the play loop
//! - **Turn order**: injectable choice of the opening player
//! - **I/O**: [`MoveSource`] and [`MessageSink`] capabilities
//!
//! # Example
//!
//! ```
//! use noughts::{FixedTurnOrder, Game, Mark, Outcome, Player, ScriptedMoves, Seat, Transcript};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let alice = Player::new("Alice", Mark::X)?;
//! let bob = Player::new("Bob", Mark::O)?;
//! let mut game = Game::new(alice, bob, FixedTurnOrder(Seat::A))?;
//!
//! let mut transcript = Transcript::new();
//! let outcome = game.play(ScriptedMoves::new(["1", "4", "5", "7", "9"]), &mut transcript)?;
//!
//! assert_eq!(outcome, Outcome::Winner(Mark::X));
//! assert!(transcript.contains("Alice won!"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod io;
mod player;
mod position;
pub mod rules;
mod turn_order;
mod types;

// Crate-level exports - Board
pub use board::{Board, DEFAULT_EMPTY_GLYPH, OverwritePolicy};

// Crate-level exports - Errors
pub use error::{BoardError, ConstructionError, GameError, InputError};

// Crate-level exports - Game loop
pub use game::{Game, TIE_MESSAGE};
pub use turn_order::{FixedTurnOrder, RandomTurnOrder, Seat, TurnOrder};

// Crate-level exports - I/O capabilities
pub use io::{LineSink, LineSource, MessageSink, MoveSource, ScriptedMoves, Transcript};

// Crate-level exports - Domain types
pub use player::{Player, PlayerBuilder};
pub use position::Position;
pub use types::{Cell, Mark, Outcome, Phase, TerminalState};
