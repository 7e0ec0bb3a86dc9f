//! Player identity: a display name and a mark.

use super::error::ConstructionError;
use super::types::Mark;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A seated player. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(try_from = "PlayerBuilder")]
pub struct Player {
    /// Name shown in prompts and results.
    name: String,
    /// Mark this player places.
    #[getter(skip)]
    mark: Mark,
}

impl Player {
    /// Creates a player, rejecting blank names.
    #[track_caller]
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, mark: Mark) -> Result<Self, ConstructionError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ConstructionError::new("Player name must not be blank"));
        }
        Ok(Self {
            name: name.to_string(),
            mark,
        })
    }

    /// Starts a builder with neither field set.
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::default()
    }

    /// Returns the player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}

/// Collects player fields that may arrive separately, e.g. from config.
#[derive(Debug, Clone, Default, Setters, Deserialize)]
#[setters(strip_option, into)]
pub struct PlayerBuilder {
    name: Option<String>,
    mark: Option<Mark>,
}

impl PlayerBuilder {
    /// Builds the player, failing if a field is missing.
    #[track_caller]
    pub fn build(self) -> Result<Player, ConstructionError> {
        let Some(name) = self.name else {
            return Err(ConstructionError::new("Player requires a name"));
        };
        let Some(mark) = self.mark else {
            return Err(ConstructionError::new("Player requires a mark"));
        };
        Player::new(name, mark)
    }
}

impl TryFrom<PlayerBuilder> for Player {
    type Error = ConstructionError;

    fn try_from(builder: PlayerBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let player = Player::new("Alice", Mark::X).unwrap();
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.mark(), Mark::X);
        assert_eq!(player.to_string(), "Alice (X)");
    }

    #[test]
    fn test_name_is_trimmed() {
        let player = Player::new("  Bob ", Mark::O).unwrap();
        assert_eq!(player.name(), "Bob");
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = Player::new("   ", Mark::O).unwrap_err();
        assert_eq!(err.message, "Player name must not be blank");
    }

    #[test]
    fn test_builder_requires_both_fields() {
        let err = Player::builder().mark(Mark::X).build().unwrap_err();
        assert_eq!(err.message, "Player requires a name");

        let err = Player::builder().name("Carol").build().unwrap_err();
        assert_eq!(err.message, "Player requires a mark");

        let player = Player::builder().name("Carol").mark(Mark::O).build().unwrap();
        assert_eq!(player.mark(), Mark::O);
    }

    #[test]
    fn test_deserialize_validates_fields() {
        let player: Player = serde_json::from_str(r#"{"name":" Dan ","mark":"X"}"#).unwrap();
        assert_eq!(player.name(), "Dan");

        let err = serde_json::from_str::<Player>(r#"{"name":"   ","mark":"X"}"#).unwrap_err();
        assert!(err.to_string().contains("Player name must not be blank"));

        let err = serde_json::from_str::<Player>(r#"{"name":"Dan"}"#).unwrap_err();
        assert!(err.to_string().contains("Player requires a mark"));
    }

    #[test]
    fn test_serialize_round_trip() {
        let player = Player::new("Eve", Mark::O).unwrap();
        let json = serde_json::to_string(&player).unwrap();
        assert_eq!(serde_json::from_str::<Player>(&json).unwrap(), player);
    }
}
