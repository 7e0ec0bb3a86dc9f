//! Wiring between configuration, the engine and the console.

use crate::config::GameConfig;
use anyhow::{Context, Result};
use noughts::{Game, LineSource, MessageSink, MoveSource, Outcome, ScriptedMoves};
use tracing::{info, instrument};

/// Sets up a game from `config` and plays it over the given collaborators.
#[instrument(skip_all)]
pub fn play_game(
    config: &GameConfig,
    input: impl MoveSource,
    output: impl MessageSink,
) -> Result<Outcome> {
    let (player_a, player_b) = config.players().context("Invalid player configuration")?;
    let mut game = Game::with_board(player_a, player_b, config.board(), config.turn_order())
        .context("Failed to set up game")?;

    let outcome = game.play(input, output).context("Game aborted")?;
    info!(%outcome, "Game finished");
    Ok(outcome)
}

/// Plays on stdin/stdout, or from a scripted move list when one is given.
#[instrument(skip_all)]
pub fn play_console(
    config: &GameConfig,
    moves: Option<Vec<String>>,
    output: impl MessageSink,
) -> Result<Outcome> {
    match moves {
        Some(moves) => play_game(config, ScriptedMoves::new(moves), output),
        None => {
            let stdin = std::io::stdin();
            play_game(config, LineSource::new(stdin.lock()), output)
        }
    }
}
