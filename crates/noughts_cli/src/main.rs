//! Noughts - two-player tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::LineSink;
use noughts_cli::{Cli, Command, GameConfig, play_console};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base = GameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Play(args) => run_play(base.with_overrides(&args.overrides), args.moves),
        Command::Config(args) => print_config(&base.with_overrides(&args)),
    }
}

/// Play one game on the console.
#[instrument(skip_all)]
fn run_play(config: GameConfig, moves: Option<Vec<String>>) -> Result<()> {
    info!("Starting noughts");
    let stdout = std::io::stdout();
    play_console(&config, moves, LineSink::new(stdout.lock()))?;
    Ok(())
}

/// Print the effective configuration.
fn print_config(config: &GameConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
