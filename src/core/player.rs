//! Seat identification and per-seat storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting 1-255 players, in turn order.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, with circular
//! rotation for turn order.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Most seats a game supports.
pub const MAX_PLAYERS: usize = 255;

/// Seat identifier.
///
/// Seat indices are 0-based: the first player to move is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0 as usize + 1)
    }
}

/// Per-seat data storage with O(1) access.
///
/// [`PlayerMap::from_vec`] only builds maps with 1 to [`MAX_PLAYERS`]
/// entries. Decoding does not check this.
///
/// ```
/// use kniffel::core::{PlayerId, PlayerMap};
///
/// let mut scores = PlayerMap::from_vec(vec![0u32; 3]).unwrap();
/// scores[PlayerId::new(1)] = 42;
///
/// assert_eq!(scores[PlayerId::new(1)], 42);
/// assert_eq!(scores.next_after(PlayerId::new(2)), PlayerId::new(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Wrap an existing list of per-seat values, in seat order.
    ///
    /// Returns `None` if the list is empty or longer than [`MAX_PLAYERS`].
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Option<Self> {
        if data.is_empty() || data.len() > MAX_PLAYERS {
            return None;
        }
        Some(Self { data })
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// The seat that moves after `player`, wrapping to the first seat.
    #[must_use]
    pub fn next_after(&self, player: PlayerId) -> PlayerId {
        PlayerId(((player.index() + 1) % self.data.len()) as u8)
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
