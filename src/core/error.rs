//! Errors raised by the rules engine.
//!
//! Every rejected operation is a pure no-op on game state: the caller can
//! prompt again (human seat) or treat the error as a bug (automated seat).

use thiserror::Error;

use crate::scoring::CategoryKind;

/// Rule violations reported by dice, scoreboard, player and game operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KniffelError {
    /// A die index outside `1..=5`.
    #[error("die index {index} is out of range (expected 1-5)")]
    DieIndexOutOfRange { index: usize },

    /// A category index outside `1..=13`.
    #[error("category index {index} is out of range (expected 1-13)")]
    CategoryIndexOutOfRange { index: usize },

    /// A fourth roll within one turn.
    #[error("you have already rolled {limit} times")]
    RollLimitExceeded { limit: u8 },

    /// Resubmission of a committed category.
    #[error("category {category} is already filled")]
    CategoryAlreadyFilled { category: CategoryKind },

    /// Mutation attempted after the final turn.
    #[error("the game is over")]
    GameOver,

    /// `play_auto_turn` called while a human player is active.
    #[error("{name} is not an automated player")]
    NotAutomated { name: String },

    /// The game configuration cannot produce a playable game.
    #[error("invalid game configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A game that no sequence of legal operations could have produced,
    /// typically a tampered save.
    #[error("inconsistent game state: {reason}")]
    InvalidState { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            KniffelError::DieIndexOutOfRange { index: 6 }.to_string(),
            "die index 6 is out of range (expected 1-5)"
        );
        assert_eq!(
            KniffelError::RollLimitExceeded { limit: 3 }.to_string(),
            "you have already rolled 3 times"
        );
        assert_eq!(
            KniffelError::CategoryAlreadyFilled {
                category: CategoryKind::FullHouse
            }
            .to_string(),
            "category Full house is already filled"
        );
    }
}
