//! Player identification for the two-seat sowing game.
//!
//! Seats are 0-based: player 0 owns the bottom row and the store at ring
//! index 7, player 1 owns the top row and the store at ring index 0.

use serde::{Deserialize, Serialize};

/// Number of seats at the board. The rules are written for exactly two.
pub const NUM_PLAYERS: usize = 2;

/// Type-safe player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    ///
    /// ```
    /// use mancala_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).opponent(), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).opponent(), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn opponent(self) -> Self {
        debug_assert!(self.index() < NUM_PLAYERS);
        Self(1 - self.0)
    }

    /// Iterate over both seats in order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        (0..NUM_PLAYERS as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
