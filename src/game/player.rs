//! A seated player: name, scoreboard, dice and per-turn counters.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DiceSource, KniffelError, PlayerKind};
use crate::dice::{DiceSet, DICE_COUNT};
use crate::scoring::{CategoryKind, ScoreBoard, Submission};

/// Rolls allowed per turn.
pub const MAX_ROLLS: u8 = 3;

/// One player's full state.
///
/// The dice and roll counter are replaced exactly once per turn, right
/// after a successful category submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    board: ScoreBoard,
    dice: DiceSet,
    rolls_taken: u8,
    turns_taken: u32,
}

impl Player {
    /// A fresh player with an empty board and unrolled dice.
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            board: ScoreBoard::new(),
            dice: DiceSet::new(),
            rolls_taken: 0,
            turns_taken: 0,
        }
    }

    /// Roll every free die.
    ///
    /// Fails with [`KniffelError::RollLimitExceeded`] on a fourth roll.
    pub fn roll(
        &mut self,
        source: &mut impl DiceSource,
    ) -> Result<[u8; DICE_COUNT], KniffelError> {
        if self.rolls_taken >= MAX_ROLLS {
            return Err(KniffelError::RollLimitExceeded { limit: MAX_ROLLS });
        }
        self.dice.roll(source);
        self.rolls_taken += 1;
        debug!(player = %self.name, roll = self.rolls_taken, dice = %self.dice, "player rolled");
        Ok(self.dice.values())
    }

    /// Hold dice by 1-based index.
    pub fn hold(&mut self, indices: &[usize]) -> Result<(), KniffelError> {
        self.dice.hold(indices)
    }

    /// Release dice by 1-based index.
    pub fn unhold(&mut self, indices: &[usize]) -> Result<(), KniffelError> {
        self.dice.unhold(indices)
    }

    /// Commit the current dice to the category with 1-based `index`, then
    /// start over with fresh dice.
    pub fn submit_category(&mut self, index: usize) -> Result<Submission, KniffelError> {
        let kind = CategoryKind::from_index(index)?;
        self.submit_kind(kind)
    }

    /// Commit the current dice to `kind`, then start over with fresh dice.
    pub fn submit_kind(&mut self, kind: CategoryKind) -> Result<Submission, KniffelError> {
        let submission = self.board.submit_kind(kind, self.dice)?;
        self.dice = DiceSet::new();
        self.rolls_taken = 0;
        Ok(submission)
    }

    /// Forget all progress, keeping name and kind.
    pub fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.name), self.kind);
    }

    pub(crate) fn begin_turn(&mut self) {
        self.turns_taken += 1;
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human or automated.
    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Is this seat driven by the built-in strategy?
    #[must_use]
    pub fn is_auto(&self) -> bool {
        self.kind == PlayerKind::Auto
    }

    /// The scoreboard.
    #[must_use]
    pub fn board(&self) -> &ScoreBoard {
        &self.board
    }

    /// The live dice.
    #[must_use]
    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    /// Rolls taken this turn (0..=3).
    #[must_use]
    pub fn rolls_taken(&self) -> u8 {
        self.rolls_taken
    }

    /// Rolls still allowed this turn.
    #[must_use]
    pub fn rolls_remaining(&self) -> u8 {
        MAX_ROLLS - self.rolls_taken
    }

    /// Turns started so far, including the current one.
    #[must_use]
    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    /// Current total score.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.board.total()
    }
}
