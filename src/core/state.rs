//! Game state: the board, the player to move, and the sowing history.
//!
//! ## Mutation discipline
//!
//! `GameState` is mutated exclusively through the rules engine
//! (`MancalaGame::apply_action` / `undo_action`). Everything else gets
//! read-only accessors, which is what keeps the 48-bean conservation
//! invariant checkable at any point.
//!
//! ## Cloning
//!
//! `Clone` produces a fully independent deep copy. The history rides in an
//! `im::Vector`, so clones are O(1) in history length and still share no
//! mutable data.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::board::Board;
use super::player::PlayerId;

/// Complete state of one game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: PlayerId,
    move_number: u32,
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Create the starting state: fresh board, player 0 to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new(), PlayerId::new(0))
    }

    /// Create a state from an arbitrary board position. Intended for
    /// analysis setups and tests; the history starts empty.
    #[must_use]
    pub fn with_board(board: Board, to_move: PlayerId) -> Self {
        Self {
            board,
            current_player: to_move,
            move_number: 0,
            history: Vector::new(),
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Sowing moves applied so far.
    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// The per-move history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Comma-joined action list, e.g. `"3, 10, 4"`.
    #[must_use]
    pub fn history_string(&self) -> String {
        self.history
            .iter()
            .map(|record| record.action.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Serialize to a byte snapshot for checkpointing.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Restore a state from a byte snapshot.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }

    // === Mutators reserved for the rules engine ===

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_current_player(&mut self, player: PlayerId) {
        self.current_player = player;
    }

    pub(crate) fn record_move(&mut self, action: Action) {
        let record = ActionRecord::new(self.current_player, action, self.board, self.move_number);
        self.history.push_back(record);
    }

    pub(crate) fn bump_move_counter(&mut self) {
        self.move_number += 1;
    }

    /// Pop the newest history entry and restore board, mover, and counter
    /// from its snapshot. Returns the undone action.
    pub(crate) fn pop_and_restore(&mut self) -> Option<Action> {
        let record = self.history.pop_back()?;
        self.board = record.board;
        self.current_player = record.player;
        self.move_number = record.move_number;
        Some(record.action)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}
