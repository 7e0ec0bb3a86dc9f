//! Game configuration loaded from TOML and overridden by CLI flags.

use crate::cli::OverrideArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use noughts::{
    Board, ConstructionError, DEFAULT_EMPTY_GLYPH, FixedTurnOrder, Mark, OverwritePolicy, Player,
    RandomTurnOrder, Seat, TurnOrder,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Who opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstMover {
    /// Fair coin toss.
    #[default]
    Random,
    /// Player A always opens.
    A,
    /// Player B always opens.
    B,
}

/// Name and mark for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct PlayerConfig {
    /// Display name.
    name: String,
    /// Mark placed by this player.
    mark: Mark,
}

impl PlayerConfig {
    /// Builds the engine player.
    #[track_caller]
    pub fn to_player(&self) -> Result<Player, ConstructionError> {
        Player::builder()
            .name(self.name.as_str())
            .mark(self.mark)
            .build()
    }
}

/// Everything needed to set up one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who opens the game.
    #[serde(default)]
    first: FirstMover,

    /// Seed for the random toss; entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,

    /// Treatment of moves onto occupied squares.
    #[serde(default)]
    overwrite: OverwritePolicy,

    /// Placeholder for empty cells when rendering.
    #[serde(default = "default_empty_glyph")]
    empty_glyph: char,

    /// First seat.
    #[serde(default = "default_player_a")]
    player_a: PlayerConfig,

    /// Second seat.
    #[serde(default = "default_player_b")]
    player_b: PlayerConfig,
}

#[instrument]
fn default_player_a() -> PlayerConfig {
    PlayerConfig::new("Player 1".to_string(), Mark::X)
}

#[instrument]
fn default_player_b() -> PlayerConfig {
    PlayerConfig::new("Player 2".to_string(), Mark::O)
}

#[instrument]
fn default_empty_glyph() -> char {
    DEFAULT_EMPTY_GLYPH
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_a: default_player_a(),
            player_b: default_player_b(),
            first: FirstMover::default(),
            seed: None,
            overwrite: OverwritePolicy::default(),
            empty_glyph: default_empty_glyph(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            player_a = %config.player_a.name,
            player_b = %config.player_b.name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[track_caller]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, else `noughts.toml` if present, else defaults.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, args: &OverrideArgs) -> Self {
        if let Some(name) = &args.player_a {
            self.player_a.name = name.clone();
        }
        if let Some(name) = &args.player_b {
            self.player_b.name = name.clone();
        }
        if let Some(first) = args.first {
            self.first = first;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if args.reject_overwrite {
            self.overwrite = OverwritePolicy::Reject;
        }
        self
    }

    /// Builds both engine players.
    pub fn players(&self) -> Result<(Player, Player), ConstructionError> {
        Ok((self.player_a.to_player()?, self.player_b.to_player()?))
    }

    /// Empty board set up with the configured policy and glyph.
    pub fn board(&self) -> Board {
        Board::new()
            .with_policy(self.overwrite)
            .with_glyph(self.empty_glyph)
    }

    /// Strategy for picking the opening player.
    pub fn turn_order(&self) -> Box<dyn TurnOrder> {
        match (self.first, self.seed) {
            (FirstMover::A, _) => Box::new(FixedTurnOrder(Seat::A)),
            (FirstMover::B, _) => Box::new(FixedTurnOrder(Seat::B)),
            (FirstMover::Random, Some(seed)) => Box::new(RandomTurnOrder::seeded(seed)),
            (FirstMover::Random, None) => Box::new(RandomTurnOrder::from_entropy()),
        }
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
