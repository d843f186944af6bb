//! # kniffel
//!
//! A Kniffel dice game engine: five dice, thirteen categories, any number
//! of seats, human or automated.
//!
//! ## Design Principles
//!
//! 1. **Pure Scoring**: Every category is scored by one pure function of
//!    the dice. Previews never touch the scoreboard.
//!
//! 2. **Injected Randomness**: Dice come from a `DiceSource` owned by the
//!    game. Seeded games replay exactly; tests script every face.
//!
//! 3. **Rejections Are No-Ops**: A failed operation returns an error and
//!    leaves the game exactly as it was.
//!
//! ## Modules
//!
//! - `core`: Seats, configuration, actions, errors, random sources
//! - `dice`: Dice and the five-dice set
//! - `scoring`: Categories, scoring rules, the scoreboard and bonuses
//! - `game`: Players and the turn engine
//! - `strategy`: Category choice for automated seats
//! - `persist`: Save files
//! - `cli`: Prompt commands and score tables
//!
//! ```
//! use kniffel::{Game, GameConfig, GreedyStrategy};
//!
//! let config = GameConfig::standard(0, 2).with_seed(3);
//! let mut game = Game::new(&config).unwrap();
//!
//! game.play_auto_turns(&GreedyStrategy).unwrap();
//!
//! assert!(game.is_over());
//! assert!(game.result().is_some());
//! ```

pub mod cli;
pub mod core;
pub mod dice;
pub mod game;
pub mod persist;
pub mod scoring;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, DiceSource, FixedDice, GameConfig, GameRng, KniffelError, PlayerId,
    PlayerKind, PlayerMap,
};

pub use crate::dice::{DiceSet, Die};

pub use crate::scoring::{evaluate, CategoryKind, ScoreBoard, Submission};

pub use crate::game::{Game, GameResult, Player, TurnPhase};

pub use crate::strategy::{CategoryStrategy, GreedyStrategy};

pub use crate::persist::SaveError;
