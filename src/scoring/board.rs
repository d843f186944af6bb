//! A player's scoreboard ("block"): thirteen slots and the bonuses.
//!
//! ## Totals
//!
//! ```text
//! total = upper subtotal
//!       + 35 if the upper subtotal reaches 63
//!       + lower subtotal
//!       + 50 for every extra five-of-a-kind scored in the upper section
//! ```
//!
//! The upper bonus is derived from the slots on demand. Only the
//! five-of-a-kind bonuses are accumulated in `bonus_points`, because they
//! depend on the order in which categories were filled.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::category::{CategoryKind, CATEGORY_COUNT};
use super::rules::evaluate;
use crate::core::KniffelError;
use crate::dice::{DiceSet, DICE_COUNT};

/// Upper subtotal needed for the upper bonus.
pub const UPPER_BONUS_THRESHOLD: u32 = 63;

/// Upper bonus amount.
pub const UPPER_BONUS: u32 = 35;

/// Bonus for each additional five-of-a-kind scored in the upper section.
pub const EXTRA_KNIFFEL_BONUS: u32 = 50;

/// One category on the scoreboard: empty, or committed with a dice snapshot.
///
/// Once committed a slot never changes again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategorySlot {
    kind: CategoryKind,
    dice: Option<DiceSet>,
}

impl CategorySlot {
    /// An empty slot.
    #[must_use]
    pub const fn new(kind: CategoryKind) -> Self {
        Self { kind, dice: None }
    }

    /// The category this slot scores.
    #[must_use]
    pub const fn kind(&self) -> CategoryKind {
        self.kind
    }

    /// Fixed 1-based index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.kind.index()
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The committed dice, if any.
    #[must_use]
    pub fn dice(&self) -> Option<&DiceSet> {
        self.dice.as_ref()
    }

    /// Has this slot received dice?
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        self.dice.is_some()
    }

    /// Committed score, 0 while empty.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.dice.as_ref().map_or(0, |dice| evaluate(self.kind, dice))
    }

    /// What this slot would score with `candidate`, or `None` if it is
    /// already committed. Never touches the slot.
    #[must_use]
    pub fn preview(&self, candidate: &DiceSet) -> Option<u32> {
        if self.is_committed() {
            None
        } else {
            Some(evaluate(self.kind, candidate))
        }
    }

    fn commit(&mut self, dice: DiceSet) -> Result<(), KniffelError> {
        if self.is_committed() {
            return Err(KniffelError::CategoryAlreadyFilled {
                category: self.kind,
            });
        }
        self.dice = Some(dice);
        Ok(())
    }
}

/// Outcome of a successful category submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// The category that was filled.
    pub category: CategoryKind,
    /// The score it was filled with.
    pub score: u32,
    /// Extra five-of-a-kind bonus awarded by this submission.
    pub bonus: u32,
}

/// Thirteen category slots plus accumulated bonus points.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreBoard {
    slots: [CategorySlot; CATEGORY_COUNT],
    bonus_points: u32,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreBoard {
    /// A board with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: CategoryKind::ALL.map(CategorySlot::new),
            bonus_points: 0,
        }
    }

    /// Commit `dice` to the category with 1-based index `index`.
    ///
    /// Awards [`EXTRA_KNIFFEL_BONUS`] when an upper category is filled with
    /// five dice of its own face after the Kniffel slot already scored.
    pub fn submit(&mut self, index: usize, dice: DiceSet) -> Result<Submission, KniffelError> {
        let kind = CategoryKind::from_index(index)?;
        self.submit_kind(kind, dice)
    }

    /// Commit `dice` to `kind`. See [`ScoreBoard::submit`].
    pub fn submit_kind(
        &mut self,
        kind: CategoryKind,
        dice: DiceSet,
    ) -> Result<Submission, KniffelError> {
        self.slots[kind.slot()].commit(dice)?;

        let score = self.slots[kind.slot()].score();
        let bonus = match kind.face() {
            Some(face)
                if self.slot(CategoryKind::FiveOfAKind).score() > 0
                    && dice.count_face(face) == DICE_COUNT =>
            {
                EXTRA_KNIFFEL_BONUS
            }
            _ => 0,
        };
        self.bonus_points += bonus;

        info!(category = %kind, %dice, score, "category submitted");
        if bonus > 0 {
            info!(category = %kind, bonus, "extra kniffel bonus awarded");
        }

        Ok(Submission {
            category: kind,
            score,
            bonus,
        })
    }

    /// The slot for `kind`.
    #[must_use]
    pub fn slot(&self, kind: CategoryKind) -> &CategorySlot {
        &self.slots[kind.slot()]
    }

    /// All slots in canonical order.
    #[must_use]
    pub fn slots(&self) -> &[CategorySlot; CATEGORY_COUNT] {
        &self.slots
    }

    /// Categories still open, in canonical order.
    pub fn open_categories(&self) -> impl Iterator<Item = CategoryKind> + '_ {
        self.slots
            .iter()
            .filter(|s| !s.is_committed())
            .map(CategorySlot::kind)
    }

    /// Every slot committed?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(CategorySlot::is_committed)
    }

    /// Sum of the six upper slots, without bonus.
    #[must_use]
    pub fn upper_subtotal(&self) -> u32 {
        CategoryKind::UPPER.iter().map(|&k| self.slot(k).score()).sum()
    }

    /// [`UPPER_BONUS`] if the upper subtotal reaches the threshold.
    #[must_use]
    pub fn upper_bonus(&self) -> u32 {
        if self.upper_subtotal() >= UPPER_BONUS_THRESHOLD {
            UPPER_BONUS
        } else {
            0
        }
    }

    /// Upper subtotal including the upper bonus.
    #[must_use]
    pub fn upper_total(&self) -> u32 {
        self.upper_subtotal() + self.upper_bonus()
    }

    /// Sum of the seven lower slots.
    #[must_use]
    pub fn lower_total(&self) -> u32 {
        self.slots
            .iter()
            .filter(|s| !s.kind().is_upper())
            .map(CategorySlot::score)
            .sum()
    }

    /// Accumulated extra five-of-a-kind bonuses.
    #[must_use]
    pub fn bonus_points(&self) -> u32 {
        self.bonus_points
    }

    /// Final score.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.upper_total() + self.lower_total() + self.bonus_points
    }

    /// Slots sit at their own category's position, committed dice are
    /// legal, and the bonus is a whole number of extra Kniffels that the
    /// upper section could have paid out.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let slots_in_place = self.slots.iter().enumerate().all(|(i, slot)| {
            slot.kind().slot() == i && slot.dice().map_or(true, DiceSet::is_valid)
        });
        let max_bonus = EXTRA_KNIFFEL_BONUS * CategoryKind::UPPER.len() as u32;

        slots_in_place
            && self.bonus_points % EXTRA_KNIFFEL_BONUS == 0
            && self.bonus_points <= max_bonus
    }
}
