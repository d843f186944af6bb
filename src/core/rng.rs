//! Random sources for dice rolls.
//!
//! ## Key Features
//!
//! - **Injected**: The engine never touches global random state. Every roll
//!   pulls from a `DiceSource` owned by the game.
//! - **Deterministic**: Same seed produces identical dice.
//! - **Serializable**: `GameRng` saves as a seed plus stream position, so a
//!   loaded game resumes the exact same sequence of rolls.
//! - **Scriptable**: `FixedDice` replays a fixed face sequence for tests.
//!
//! ```
//! use kniffel::core::{DiceSource, GameRng};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! for _ in 0..10 {
//!     let face = rng1.roll_face();
//!     assert!((1..=6).contains(&face));
//!     assert_eq!(face, rng2.roll_face());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Lowest face a die can show after a roll.
pub const MIN_FACE: u8 = 1;

/// Highest face a die can show.
pub const MAX_FACE: u8 = 6;

/// A source of uniformly distributed die faces in `1..=6`.
pub trait DiceSource {
    /// Produce the next face.
    fn roll_face(&mut self) -> u8;
}

/// Seeded ChaCha8 random source.
///
/// Uses ChaCha8 for speed while keeping a high quality stream. Serializes
/// through [`GameRngState`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(into = "GameRngState", from = "GameRngState")]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceSource for GameRng {
    fn roll_face(&mut self) -> u8 {
        self.inner.gen_range(MIN_FACE..=MAX_FACE)
    }
}

/// Two streams are equal when they started from the same seed and sit at
/// the same position.
impl PartialEq for GameRng {
    fn eq(&self, other: &Self) -> bool {
        self.state() == other.state()
    }
}

impl Eq for GameRng {}

impl From<GameRngState> for GameRng {
    fn from(state: GameRngState) -> Self {
        Self::from_state(&state)
    }
}

impl From<GameRng> for GameRngState {
    fn from(rng: GameRng) -> Self {
        rng.state()
    }
}

/// Serializable RNG state for save files.
///
/// Uses the ChaCha8 word position so the size is constant regardless of
/// how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of faces, wrapping around at the end.
///
/// Faces outside `1..=6` are clamped into range so a typo in a test script
/// can never produce an impossible die.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl FixedDice {
    /// Create a source that yields `faces` in order, then starts over.
    ///
    /// # Panics
    ///
    /// Panics if `faces` is empty.
    #[must_use]
    pub fn new(faces: impl Into<Vec<u8>>) -> Self {
        let faces = faces.into();
        assert!(!faces.is_empty(), "FixedDice needs at least one face");
        Self { faces, cursor: 0 }
    }

    /// Number of faces handed out so far.
    #[must_use]
    pub fn rolls_served(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for FixedDice {
    fn roll_face(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face.clamp(MIN_FACE, MAX_FACE)
    }
}
