//! Category selection for automated players.
//!
//! Strategies are trait-based so a host can plug in its own heuristic:
//! - `CategoryStrategy`: pick an open category for the player's current dice
//! - `GreedyStrategy`: highest preview score, ties to the later category
//!
//! Strategies only choose. Re-roll decisions are not modeled; the turn
//! engine has already rolled once before a strategy is asked.

use tracing::debug;

use crate::core::KniffelError;
use crate::game::Player;
use crate::scoring::CategoryKind;

/// Policy for choosing which category an automated player fills.
pub trait CategoryStrategy: Send + Sync {
    /// Pick an open category for `player`'s current dice.
    ///
    /// Must never return a committed category.
    fn choose(&self, player: &Player) -> Result<CategoryKind, KniffelError>;
}

/// Greedy one-shot strategy.
///
/// Walks the open categories in canonical order and keeps the last one whose
/// preview score is greater than or equal to the best seen so far. A tie
/// therefore goes to the later category.
///
/// When every category is already committed there is nothing to choose and
/// the result is [`KniffelError::CategoryIndexOutOfRange`] with index 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrategy;

impl CategoryStrategy for GreedyStrategy {
    fn choose(&self, player: &Player) -> Result<CategoryKind, KniffelError> {
        let dice = player.dice();
        let mut best: Option<(CategoryKind, u32)> = None;

        for slot in player.board().slots() {
            let Some(score) = slot.preview(dice) else {
                continue;
            };
            debug!(category = %slot.kind(), score, "preview");
            if best.map_or(true, |(_, top)| score >= top) {
                best = Some((slot.kind(), score));
            }
        }

        best.map(|(kind, _)| kind)
            .ok_or(KniffelError::CategoryIndexOutOfRange { index: 0 })
    }
}
