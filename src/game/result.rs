//! Final standings.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};
use super::player::Player;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several seats tied on the highest total.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Decide the result from final totals. Highest total wins; ties share.
    #[must_use]
    pub fn from_players(players: &PlayerMap<Player>) -> Self {
        let best = players.values().map(Player::total).max().unwrap_or(0);
        let mut winners: Vec<PlayerId> = players
            .iter()
            .filter(|(_, p)| p.total() == best)
            .map(|(id, _)| id)
            .collect();

        if winners.len() == 1 {
            GameResult::Winner(winners.remove(0))
        } else {
            GameResult::Winners(winners)
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }

    /// All winning seats.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            GameResult::Winner(p) => std::slice::from_ref(p),
            GameResult::Winners(ps) => ps,
        }
    }
}

/// Seats ordered by total, highest first. Equal totals keep seat order.
#[must_use]
pub fn standings(players: &PlayerMap<Player>) -> Vec<(PlayerId, u32)> {
    let mut rows: Vec<_> = players.iter().map(|(id, p)| (id, p.total())).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}
