//! Rules engine trait: the boundary a host driver programs against.
//!
//! A game implements `GameRules` to define:
//! - What actions are legal
//! - How actions modify state
//! - When the game ends and who won
//!
//! The trait is object-safe so a host can hold `Box<dyn GameRules>` from a
//! registry lookup without caring which concrete game it got.

use smallvec::SmallVec;

use crate::core::action::Action;
use crate::core::board::NUM_ROW_PITS;
use crate::core::config::GameMetadata;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Legal-move list. A mover has at most six non-empty row pits, so this
/// stays on the stack.
pub type ActionList = SmallVec<[Action; NUM_ROW_PITS]>;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// Single winner.
    Winner(PlayerId),
    /// Equal bean totals.
    Draw,
}

impl GameOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameOutcome::Winner(p) => *p == player,
            GameOutcome::Draw => false,
        }
    }

    /// The normalized zero-sum returns pair, indexed by player.
    ///
    /// Always one of `[1.0, -1.0]`, `[-1.0, 1.0]`, or `[0.0, 0.0]`.
    #[must_use]
    pub fn returns(&self) -> [f64; 2] {
        match self {
            GameOutcome::Winner(p) if p.index() == 0 => [1.0, -1.0],
            GameOutcome::Winner(_) => [-1.0, 1.0],
            GameOutcome::Draw => [0.0, 0.0],
        }
    }
}

/// Rules engine trait.
///
/// A host drives a game through this loop: ask `legal_actions`, pick one,
/// hand it to `apply_action`, check `outcome`, repeat.
///
/// ## Implementation Notes
///
/// - `legal_actions`: must return empty once the game is over
/// - `apply_action`: trusts its input; callers only apply actions the
///   generator returned
/// - `outcome`: `None` while the game continues
pub trait GameRules {
    /// The registration-time descriptor for this game.
    fn metadata(&self) -> &GameMetadata;

    /// Build the starting state.
    fn new_initial_state(&self) -> GameState;

    /// Enumerate the mover's legal actions.
    ///
    /// Empty iff the state is terminal.
    fn legal_actions(&self, state: &GameState) -> ActionList;

    /// Apply an action to the game state.
    ///
    /// The action must be one the generator currently returns; applying
    /// anything else is a caller-contract violation with undefined results.
    fn apply_action(&self, state: &mut GameState, action: Action);

    /// Check if the game is over.
    ///
    /// Returns `Some(outcome)` if the game has ended, `None` if it continues.
    fn outcome(&self, state: &GameState) -> Option<GameOutcome>;

    // === Convenience Methods ===

    /// Whether the game has ended.
    fn is_terminal(&self, state: &GameState) -> bool {
        self.outcome(state).is_some()
    }

    /// The returns pair for a finished game, `[0.0, 0.0]` while play
    /// continues.
    fn returns(&self, state: &GameState) -> [f64; 2] {
        self.outcome(state)
            .map_or([0.0, 0.0], |outcome| outcome.returns())
    }
}
