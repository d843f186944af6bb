//! Core engine types: seats, configuration, actions, errors, randomness.
//!
//! Nothing in here knows how dice are scored. The scoring rules live in
//! [`crate::scoring`] and the turn sequencing in [`crate::game`].

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord, DieIndices};
pub use config::{GameConfig, PlayerKind, SeatConfig};
pub use error::KniffelError;
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::{DiceSource, FixedDice, GameRng, GameRngState, MAX_FACE, MIN_FACE};
