//! The five dice a player rolls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::die::Die;
use crate::core::{DiceSource, KniffelError, MAX_FACE, MIN_FACE};

/// Number of dice in a set.
pub const DICE_COUNT: usize = 5;

/// Five dice, addressed 1..=5 from outside the crate.
///
/// Invariant: rolling never changes a held die.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceSet {
    dice: [Die; DICE_COUNT],
}

impl DiceSet {
    /// Five unrolled dice.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Five free dice showing the given faces.
    ///
    /// # Panics
    ///
    /// Panics if a face is above 6. Zero marks an unrolled die.
    ///
    /// ```
    /// use kniffel::dice::DiceSet;
    ///
    /// let dice = DiceSet::from_values([2, 2, 2, 5, 5]);
    /// assert_eq!(dice.count_face(2), 3);
    /// assert_eq!(dice.sum(), 16);
    /// ```
    #[must_use]
    pub fn from_values(values: [u8; DICE_COUNT]) -> Self {
        assert!(values.iter().all(|&v| v <= MAX_FACE), "die faces must be 0-6");
        Self {
            dice: values.map(Die::showing),
        }
    }

    /// Roll every die that is not held.
    pub fn roll(&mut self, source: &mut impl DiceSource) {
        for die in &mut self.dice {
            die.roll(source);
        }
        debug!(dice = ?self.values(), "rolled dice");
    }

    /// Hold the dice at the given 1-based indices.
    ///
    /// Fails without changing anything if any index is outside `1..=5`.
    pub fn hold(&mut self, indices: &[usize]) -> Result<(), KniffelError> {
        self.set_held(indices, true)
    }

    /// Release the dice at the given 1-based indices.
    ///
    /// Fails without changing anything if any index is outside `1..=5`.
    pub fn unhold(&mut self, indices: &[usize]) -> Result<(), KniffelError> {
        self.set_held(indices, false)
    }

    /// Release every die.
    pub fn release_all(&mut self) {
        for die in &mut self.dice {
            die.held = false;
        }
    }

    fn set_held(&mut self, indices: &[usize], held: bool) -> Result<(), KniffelError> {
        if let Some(&index) = indices.iter().find(|&&i| !(1..=DICE_COUNT).contains(&i)) {
            return Err(KniffelError::DieIndexOutOfRange { index });
        }
        for &index in indices {
            self.dice[index - 1].held = held;
        }
        Ok(())
    }

    /// How many dice show `face`. Face 0 counts unrolled dice.
    #[must_use]
    pub fn count_face(&self, face: u8) -> usize {
        self.dice.iter().filter(|d| d.value == face).count()
    }

    /// Occurrences of each face, indexed by face (slot 0 = unrolled).
    #[must_use]
    pub fn face_counts(&self) -> [u8; MAX_FACE as usize + 1] {
        let mut counts = [0u8; MAX_FACE as usize + 1];
        for die in &self.dice {
            counts[die.value as usize] += 1;
        }
        counts
    }

    /// Every die shows a legal face or is still unrolled.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.dice
            .iter()
            .all(|d| d.value == 0 || (MIN_FACE..=MAX_FACE).contains(&d.value))
    }

    /// True once at least one die shows a face.
    #[must_use]
    pub fn is_rolled(&self) -> bool {
        self.dice.iter().any(Die::is_rolled)
    }

    /// Sum of all five faces.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.dice.iter().map(|d| u32::from(d.value)).sum()
    }

    /// Face values in slot order.
    #[must_use]
    pub fn values(&self) -> [u8; DICE_COUNT] {
        self.dice.map(|d| d.value)
    }

    /// Held flags in slot order.
    #[must_use]
    pub fn held(&self) -> [bool; DICE_COUNT] {
        self.dice.map(|d| d.held)
    }

    /// The dice in slot order.
    #[must_use]
    pub fn dice(&self) -> &[Die; DICE_COUNT] {
        &self.dice
    }
}

impl std::fmt::Display for DiceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.values())
    }
}
