//! The sowing board: a fixed ring of 14 bean-counting pits.
//!
//! ## Layout
//!
//! Ring indices run clockwise through both rows and both stores:
//!
//! - index 0: player 1's store
//! - indices 1..=6: player 0's row pits
//! - index 7: player 0's store
//! - indices 8..=13: player 1's row pits
//!
//! ## Conservation
//!
//! The board starts with 4 beans in each of the 12 row pits (48 total) and
//! empty stores. Sowing only moves beans between pits, so the total is
//! invariant for the lifetime of a game.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Row pits per player.
pub const NUM_ROW_PITS: usize = 6;

/// Total ring positions: two rows plus two stores.
pub const NUM_CELLS: usize = 2 * NUM_ROW_PITS + 2;

/// Beans placed in each row pit at game start.
pub const INITIAL_BEANS_PER_PIT: u8 = 4;

/// Beans on the board for the whole game.
pub const TOTAL_BEANS: u32 = INITIAL_BEANS_PER_PIT as u32 * (2 * NUM_ROW_PITS) as u32;

/// The 14-cell bean ring.
///
/// ```
/// use mancala_engine::core::Board;
///
/// let board = Board::new();
/// assert_eq!(board.total_beans(), 48);
/// assert_eq!(board.beans(1), 4);
/// assert_eq!(board.beans(7), 0); // player 0's store starts empty
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pits: [u8; NUM_CELLS],
}

impl Board {
    /// Create the starting board: every row pit holds
    /// [`INITIAL_BEANS_PER_PIT`] beans, both stores are empty.
    #[must_use]
    pub fn new() -> Self {
        let mut pits = [INITIAL_BEANS_PER_PIT; NUM_CELLS];
        pits[Self::home_pit(PlayerId::new(0))] = 0;
        pits[Self::home_pit(PlayerId::new(1))] = 0;
        Self { pits }
    }

    /// Create a board from raw pit contents. Intended for analysis setups
    /// and tests; no conservation check is applied.
    #[must_use]
    pub const fn from_pits(pits: [u8; NUM_CELLS]) -> Self {
        Self { pits }
    }

    /// Ring index of a player's store: 7 for player 0, 0 for player 1.
    #[must_use]
    pub const fn home_pit(player: PlayerId) -> usize {
        if player.0 == 0 {
            NUM_CELLS / 2
        } else {
            0
        }
    }

    /// Ring indices of a player's six row pits, in ascending order.
    #[must_use]
    pub fn row_pits(player: PlayerId) -> std::ops::RangeInclusive<usize> {
        if player.index() == 0 {
            1..=NUM_ROW_PITS
        } else {
            NUM_ROW_PITS + 2..=NUM_CELLS - 1
        }
    }

    /// Bean count at a ring position.
    #[must_use]
    pub fn beans(&self, pit: usize) -> u8 {
        self.pits[pit]
    }

    /// Beans in a player's store.
    #[must_use]
    pub fn store(&self, player: PlayerId) -> u8 {
        self.pits[Self::home_pit(player)]
    }

    /// Empty the chosen pit and drop its beans one-by-one into consecutive
    /// ring positions, both stores included. Returns the landing index.
    ///
    /// The caller guarantees `pit` is a non-empty row pit of the player to
    /// move; this is not re-validated here.
    pub fn sow(&mut self, pit: usize) -> usize {
        let beans = self.pits[pit] as usize;
        self.pits[pit] = 0;
        for i in 0..beans {
            self.pits[(pit + i + 1) % NUM_CELLS] += 1;
        }
        (pit + beans) % NUM_CELLS
    }

    /// Whether every row pit of a player is empty.
    #[must_use]
    pub fn row_is_empty(&self, player: PlayerId) -> bool {
        Self::row_pits(player).all(|pit| self.pits[pit] == 0)
    }

    /// A player's bean total: the six row pits plus the store.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        let row: u32 = Self::row_pits(player).map(|pit| self.pits[pit] as u32).sum();
        row + self.store(player) as u32
    }

    /// Beans across all 14 ring positions.
    #[must_use]
    pub fn total_beans(&self) -> u32 {
        self.pits.iter().map(|&b| b as u32).sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Three-line text dump: player 1's row reversed on top, the two stores on
/// the middle line, player 0's row on the bottom.
///
/// ```
/// use mancala_engine::core::Board;
///
/// let dump = Board::new().to_string();
/// assert_eq!(dump, "-4-4-4-4-4-4-\n0-----------0\n-4-4-4-4-4-4-");
/// ```
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "-")?;
        for i in 0..NUM_ROW_PITS {
            write!(f, "{}-", self.pits[NUM_CELLS - 1 - i])?;
        }
        writeln!(f)?;

        write!(f, "{}", self.pits[0])?;
        for _ in 0..(2 * NUM_ROW_PITS - 1) {
            write!(f, "-")?;
        }
        writeln!(f, "{}", self.pits[NUM_CELLS / 2])?;

        write!(f, "-")?;
        for i in 0..NUM_ROW_PITS {
            write!(f, "{}-", self.pits[i + 1])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::new();

        for player in PlayerId::both() {
            assert_eq!(board.store(player), 0);
            for pit in Board::row_pits(player) {
                assert_eq!(board.beans(pit), INITIAL_BEANS_PER_PIT);
            }
        }
        assert_eq!(board.total_beans(), TOTAL_BEANS);
    }

    #[test]
    fn test_home_pits() {
        assert_eq!(Board::home_pit(PlayerId::new(0)), 7);
        assert_eq!(Board::home_pit(PlayerId::new(1)), 0);
    }

    #[test]
    fn test_row_pits() {
        let p0: Vec<_> = Board::row_pits(PlayerId::new(0)).collect();
        let p1: Vec<_> = Board::row_pits(PlayerId::new(1)).collect();

        assert_eq!(p0, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(p1, vec![8, 9, 10, 11, 12, 13]);
    }

    #[test]
    fn test_sow_distributes_consecutively() {
        let mut board = Board::new();

        let landing = board.sow(1);

        assert_eq!(landing, 5);
        assert_eq!(board.beans(1), 0);
        assert_eq!(board.beans(2), 5);
        assert_eq!(board.beans(3), 5);
        assert_eq!(board.beans(4), 5);
        assert_eq!(board.beans(5), 5);
        assert_eq!(board.beans(6), 4);
        assert_eq!(board.total_beans(), TOTAL_BEANS);
    }

    #[test]
    fn test_sow_deposits_into_both_stores() {
        // 13 beans from pit 6 reach every other ring position exactly once,
        // both stores included.
        let mut pits = [0u8; NUM_CELLS];
        pits[6] = 13;
        let mut board = Board::from_pits(pits);

        let landing = board.sow(6);

        assert_eq!(landing, 5);
        assert_eq!(board.beans(6), 0);
        assert_eq!(board.store(PlayerId::new(0)), 1);
        assert_eq!(board.store(PlayerId::new(1)), 1);
        for pit in [1, 2, 3, 4, 5, 8, 9, 10, 11, 12, 13] {
            assert_eq!(board.beans(pit), 1);
        }
    }

    #[test]
    fn test_sow_wraps_past_ring_end() {
        let mut pits = [0u8; NUM_CELLS];
        pits[13] = 3;
        let mut board = Board::from_pits(pits);

        let landing = board.sow(13);

        assert_eq!(landing, 2);
        assert_eq!(board.beans(0), 1);
        assert_eq!(board.beans(1), 1);
        assert_eq!(board.beans(2), 1);
    }

    #[test]
    fn test_row_is_empty() {
        let mut pits = [0u8; NUM_CELLS];
        pits[0] = 10;
        pits[8] = 2;
        let board = Board::from_pits(pits);

        assert!(board.row_is_empty(PlayerId::new(0)));
        assert!(!board.row_is_empty(PlayerId::new(1)));
    }

    #[test]
    fn test_score_includes_store() {
        let mut pits = [0u8; NUM_CELLS];
        pits[1] = 3;
        pits[7] = 5;
        pits[0] = 2;
        pits[13] = 4;
        let board = Board::from_pits(pits);

        assert_eq!(board.score(PlayerId::new(0)), 8);
        assert_eq!(board.score(PlayerId::new(1)), 6);
    }

    #[test]
    fn test_display_initial_board() {
        let board = Board::new();
        assert_eq!(
            board.to_string(),
            "-4-4-4-4-4-4-\n0-----------0\n-4-4-4-4-4-4-"
        );
    }

    #[test]
    fn test_display_after_sowing() {
        let mut board = Board::new();
        board.sow(3);
        assert_eq!(
            board.to_string(),
            "-4-4-4-4-4-4-\n0-----------1\n-4-4-0-5-5-5-"
        );
    }

    #[test]
    fn test_board_serialization() {
        let mut board = Board::new();
        board.sow(2);

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
