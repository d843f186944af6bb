//! Players, the turn engine, and final results.
//!
//! ## Game
//!
//! [`Game`] owns every seat, the dice source and the action history. Only the
//! active seat can act: roll, hold, unhold, or submit a category. Submitting
//! passes the turn and rolls once for the next seat.
//!
//! ```
//! use kniffel::core::GameConfig;
//! use kniffel::game::Game;
//!
//! let config = GameConfig::standard(2, 0).with_seed(42);
//! let mut game = Game::new(&config).unwrap();
//!
//! game.hold(&[1, 2]).unwrap();
//! game.roll().unwrap();
//! game.submit_and_advance(13).unwrap();
//!
//! assert_eq!(game.active_player().name(), "Player 2");
//! ```

mod engine;
mod player;
mod result;

pub use engine::{Game, TurnPhase, ROUND_LIMIT};
pub use player::{Player, MAX_ROLLS};
pub use result::{standings, GameResult};
