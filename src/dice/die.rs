//! A single die.

use serde::{Deserialize, Serialize};

use crate::core::DiceSource;

/// One die: a face value and a held flag.
///
/// `value` is 0 until the die is rolled for the first time in a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    /// Current face, `0` meaning "not rolled yet".
    pub value: u8,
    /// Held dice keep their face when the set is rolled.
    pub held: bool,
}

impl Die {
    /// A die that has not been rolled.
    #[must_use]
    pub const fn unrolled() -> Self {
        Self {
            value: 0,
            held: false,
        }
    }

    /// A free die showing `value`.
    #[must_use]
    pub const fn showing(value: u8) -> Self {
        Self { value, held: false }
    }

    /// Roll unless held.
    pub fn roll(&mut self, source: &mut impl DiceSource) {
        if !self.held {
            self.value = source.roll_face();
        }
    }

    /// Has this die been rolled?
    #[must_use]
    pub const fn is_rolled(&self) -> bool {
        self.value != 0
    }
}
