//! Action representation: which pit to sow from.
//!
//! An action is just a ring index naming one of the mover's non-empty row
//! pits. The engine never builds actions itself from anything richer; the
//! legal-move generator yields them and the applier trusts them.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::PlayerId;

/// A sowing move: the ring index of the pit to empty.
///
/// Valid actions name row pits only (1..=6 for player 0, 8..=13 for
/// player 1), never a store. Applying anything else is a caller-contract
/// violation, not a checked error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action(pub u8);

impl Action {
    /// Create an action naming a pit.
    #[must_use]
    pub const fn new(pit: u8) -> Self {
        Self(pit)
    }

    /// The ring index this action sows from.
    #[must_use]
    pub const fn pit(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A history entry: the action taken plus the full pre-move snapshot.
///
/// Carrying the board and mover makes undo a total restore instead of a
/// counter rewind, so the conservation and turn invariants survive rollback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who sowed.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Board contents immediately before the action.
    pub board: Board,

    /// Move counter immediately before the action.
    pub move_number: u32,
}

impl ActionRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, board: Board, move_number: u32) -> Self {
        Self {
            player,
            action,
            board,
            move_number,
        }
    }
}
