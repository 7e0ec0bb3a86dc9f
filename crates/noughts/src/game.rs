//! Turn management for a two-player game.

use super::board::Board;
use super::error::GameError;
use super::io::{MessageSink, MoveSource};
use super::player::Player;
use super::position::Position;
use super::turn_order::{Seat, TurnOrder};
use super::types::{Outcome, Phase, TerminalState};
use tracing::{debug, info, instrument};

/// Message shown when the board fills up without a winner.
pub const TIE_MESSAGE: &str = "The game ended in a tie";

/// Two players sharing one board.
///
/// The active player is the one whose mark the next move places. Roles
/// swap after every move that leaves the board in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    active: Seat,
    randomly_chosen: bool,
    phase: Phase,
}

impl Game {
    /// Seats two players at an empty board.
    ///
    /// # Errors
    ///
    /// Returns `GameError::DuplicateMark` if both players carry the same mark.
    pub fn new(
        player_a: Player,
        player_b: Player,
        turn_order: impl TurnOrder,
    ) -> Result<Self, GameError> {
        Self::with_board(player_a, player_b, Board::new(), turn_order)
    }

    /// Seats two players at a prepared board.
    #[instrument(skip(board, turn_order), fields(a = %player_a, b = %player_b))]
    pub fn with_board(
        player_a: Player,
        player_b: Player,
        board: Board,
        mut turn_order: impl TurnOrder,
    ) -> Result<Self, GameError> {
        if player_a.mark() == player_b.mark() {
            return Err(GameError::DuplicateMark(player_a.mark()));
        }
        let active = turn_order.first();
        let randomly_chosen = turn_order.is_random();
        debug!(?active, randomly_chosen, "Seated players");
        Ok(Self {
            board,
            players: [player_a, player_b],
            active,
            randomly_chosen,
            phase: Phase::NotStarted,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seat of the player to move.
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// Player whose turn it is.
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// Player waiting for the other to move.
    pub fn waiting_player(&self) -> &Player {
        self.player(self.active.other())
    }

    /// Player in a given seat.
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::A => &self.players[0],
            Seat::B => &self.players[1],
        }
    }

    /// Swaps active and waiting players.
    pub fn switch_players(&mut self) {
        self.active = self.active.other();
    }

    /// Text asking the active player for a move.
    pub fn solicit_move_prompt(&self) -> String {
        format!(
            "{}: Enter a number between 1 and 9 to make your move",
            self.active_player().name()
        )
    }

    /// Announcement naming the opening player.
    pub fn first_player_message(&self) -> String {
        let how = if self.randomly_chosen {
            "randomly selected"
        } else {
            "selected"
        };
        format!("{} has been {} as the first player", self.active_player().name(), how)
    }

    /// Maps a move token `"1".."9"` to `(x, y)` board coordinates.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidMove` for any other token.
    pub fn translate_move(raw: &str) -> Result<(usize, usize), GameError> {
        Position::from_token(raw)
            .map(Position::coords)
            .ok_or_else(|| GameError::InvalidMove(raw.to_string()))
    }

    /// Places the active player's mark at the square named by `raw`.
    ///
    /// Returns the board evaluation after the move. Players are switched
    /// only when the game goes on.
    #[instrument(skip(self), fields(player = %self.active_player()))]
    pub fn apply_move(&mut self, raw: &str) -> Result<TerminalState, GameError> {
        if let Phase::Finished(_) = self.phase {
            return Err(GameError::Finished);
        }
        let (x, y) = Self::translate_move(raw)?;
        let mark = self.active_player().mark();
        self.board.set(x, y, mark)?;
        debug!(x, y, %mark, "Placed mark");

        let state = self.board.evaluate();
        match state.outcome() {
            Some(outcome) => {
                info!(%outcome, "Game over");
                self.phase = Phase::Finished(outcome);
            }
            None => {
                self.phase = Phase::InProgress;
                self.switch_players();
            }
        }
        Ok(state)
    }

    /// Announcement for a finished board, `None` while play continues.
    ///
    /// The winner is the player holding the winning mark, which is the
    /// active player whenever the game was played move by move.
    pub fn result_message(&self) -> Option<String> {
        match self.board.evaluate() {
            TerminalState::InProgress => None,
            TerminalState::Winner(mark) => {
                let winner = if self.active_player().mark() == mark {
                    self.active_player()
                } else {
                    self.waiting_player()
                };
                Some(format!("{} won!", winner.name()))
            }
            TerminalState::Draw => Some(TIE_MESSAGE.to_string()),
        }
    }

    /// Runs the game to completion.
    ///
    /// Each turn renders the board, prompts the active player, reads one
    /// token from `input` and applies it. On a terminal board the result
    /// and final board are written to `output`. The opening player is
    /// announced only when no move has been requested yet, so a game
    /// resumed after an error picks up at the next prompt.
    ///
    /// # Errors
    ///
    /// Fails fast on an unrecognised token, a rejected write, or closed
    /// input. The board keeps every move applied before the failure.
    #[instrument(skip_all)]
    pub fn play(
        &mut self,
        mut input: impl MoveSource,
        mut output: impl MessageSink,
    ) -> Result<Outcome, GameError> {
        if let Phase::Finished(_) = self.phase {
            return Err(GameError::Finished);
        }
        if self.phase == Phase::NotStarted {
            info!(first = %self.active_player(), "Starting game");
            output.emit(&self.first_player_message());
            self.phase = Phase::InProgress;
        }

        loop {
            output.emit(&self.board.render());
            output.emit("");
            output.emit(&self.solicit_move_prompt());

            let raw = input.next_move()?;
            let state = self.apply_move(&raw)?;

            if let Some(outcome) = state.outcome() {
                if let Some(message) = self.result_message() {
                    output.emit(&message);
                }
                output.emit(&self.board.render());
                return Ok(outcome);
            }
        }
    }
}
