//! Game configuration.
//!
//! A game is configured by listing its seats in turn order, each either
//! human or automated, plus an optional seed for the dice:
//!
//! ```
//! use kniffel::core::{GameConfig, PlayerKind};
//!
//! let config = GameConfig::new()
//!     .with_human("Alice")
//!     .with_auto("AI 1")
//!     .with_seed(7);
//!
//! assert_eq!(config.player_count(), 2);
//! assert_eq!(config.seats[1].kind, PlayerKind::Auto);
//! ```

use serde::{Deserialize, Serialize};

use super::error::KniffelError;
use super::player::MAX_PLAYERS;

/// Who makes the decisions for a seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Decisions come from outside the engine (the command line).
    #[default]
    Human,
    /// Decisions come from the built-in category strategy.
    Auto,
}

/// Configuration for a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Display name.
    pub name: String,

    /// Human or automated.
    pub kind: PlayerKind,
}

impl SeatConfig {
    /// Create a seat configuration.
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seats in turn order.
    pub seats: Vec<SeatConfig>,

    /// Dice seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic setup: `humans` seats named "Player 1..n" followed by
    /// `autos` seats named "AI 1..m".
    #[must_use]
    pub fn standard(humans: usize, autos: usize) -> Self {
        let mut config = Self::new();
        for i in 1..=humans {
            config = config.with_human(format!("Player {i}"));
        }
        for i in 1..=autos {
            config = config.with_auto(format!("AI {i}"));
        }
        config
    }

    /// Add a human seat.
    #[must_use]
    pub fn with_human(mut self, name: impl Into<String>) -> Self {
        self.seats.push(SeatConfig::new(name, PlayerKind::Human));
        self
    }

    /// Add an automated seat.
    #[must_use]
    pub fn with_auto(mut self, name: impl Into<String>) -> Self {
        self.seats.push(SeatConfig::new(name, PlayerKind::Auto));
        self
    }

    /// Fix the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), KniffelError> {
        if self.seats.is_empty() {
            return Err(KniffelError::InvalidConfig {
                reason: "at least one player is required".to_string(),
            });
        }
        if self.seats.len() > MAX_PLAYERS {
            return Err(KniffelError::InvalidConfig {
                reason: format!("at most {MAX_PLAYERS} players are supported"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_names() {
        let config = GameConfig::standard(2, 1);

        let names: Vec<_> = config.seats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Player 1", "Player 2", "AI 1"]);
        assert_eq!(config.seats[0].kind, PlayerKind::Human);
        assert_eq!(config.seats[2].kind, PlayerKind::Auto);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new().with_auto("Bot").with_seed(3);

        assert_eq!(config.player_count(), 1);
        assert_eq!(config.seed, Some(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        let err = GameConfig::standard(0, 0).validate().unwrap_err();
        assert!(matches!(err, KniffelError::InvalidConfig { .. }));
    }

    #[test]
    fn test_validate_rejects_too_many() {
        let config = GameConfig::standard(MAX_PLAYERS, 1);
        assert!(config.validate().is_err());
    }
}
