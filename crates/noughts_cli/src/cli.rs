//! Command-line interface for noughts.

use crate::config::FirstMover;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - tic-tac-toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./noughts.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play(PlayArgs),

    /// Print the effective configuration as TOML
    Config(OverrideArgs),
}

/// Arguments for `play`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayArgs {
    /// Config file overrides
    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Play a scripted sequence instead of reading stdin (e.g. 1,5,9)
    #[arg(long, value_delimiter = ',')]
    pub moves: Option<Vec<String>>,
}

/// Settings that override the config file for one run.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideArgs {
    /// Name of the first player
    #[arg(long)]
    pub player_a: Option<String>,

    /// Name of the second player
    #[arg(long)]
    pub player_b: Option<String>,

    /// Who opens the game
    #[arg(long, value_enum)]
    pub first: Option<FirstMover>,

    /// Seed for the random first-player toss
    #[arg(long)]
    pub seed: Option<u64>,

    /// Refuse moves onto occupied squares instead of overwriting them
    #[arg(long)]
    pub reject_overwrite: bool,
}
