//! Game actions and the action history.
//!
//! Every successful mutation of a game is recorded as an [`ActionRecord`]:
//! the seat that acted, what it did, and when. Rejected operations leave no
//! record.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::scoring::CategoryKind;

/// 1-based die indices. Five dice fit inline without allocating.
pub type DieIndices = SmallVec<[usize; 5]>;

/// A game action taken by the active seat.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll every die that is not held.
    Roll,
    /// Hold the named dice.
    Hold(DieIndices),
    /// Release the named dice.
    Unhold(DieIndices),
    /// Commit the current dice to a category and end the turn.
    Submit(CategoryKind),
}

impl Action {
    /// Build a hold action from any list of indices.
    #[must_use]
    pub fn hold(indices: &[usize]) -> Self {
        Self::Hold(SmallVec::from_slice(indices))
    }

    /// Build an unhold action from any list of indices.
    #[must_use]
    pub fn unhold(indices: &[usize]) -> Self {
        Self::Unhold(SmallVec::from_slice(indices))
    }

    /// Does this action end the turn?
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        matches!(self, Action::Submit(_))
    }
}

/// A recorded action with metadata for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// The acting seat's turn number (1-based).
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_builders() {
        let hold = Action::hold(&[1, 3]);
        let unhold = Action::unhold(&[2]);

        assert_eq!(hold, Action::Hold(SmallVec::from_slice(&[1, 3])));
        assert_eq!(unhold, Action::Unhold(SmallVec::from_slice(&[2])));
    }

    #[test]
    fn test_ends_turn() {
        assert!(Action::Submit(CategoryKind::Chance).ends_turn());
        assert!(!Action::Roll.ends_turn());
        assert!(!Action::hold(&[1]).ends_turn());
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(PlayerId::new(1), Action::hold(&[1, 5]), 2, 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
