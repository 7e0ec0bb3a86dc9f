//! Terminal front end for the noughts engine.
//!
//! - **cli**: clap argument definitions
//! - **config**: TOML configuration with CLI overrides
//! - **app**: builds a game from config and runs it on the console

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;

pub use app::{play_console, play_game};
pub use cli::{Cli, Command, OverrideArgs, PlayArgs};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, FirstMover, GameConfig, PlayerConfig};
