//! # mancala-engine
//!
//! A rules engine for a two-player Mancala (bean-sowing) board game,
//! built to be driven by an external game-playing host: self-play loops,
//! tournament runners, or anything else that wants legal moves in and
//! outcomes out.
//!
//! ## Design Principles
//!
//! 1. **Rules only**: legal-move generation, sowing application,
//!    terminal detection, and outcome scoring. No search, no UI.
//!
//! 2. **Legality by construction**: the generator never yields an illegal
//!    action and the applier trusts its caller, so the hot path carries no
//!    validation.
//!
//! 3. **Cheap clones**: `GameState` is a small value plus a persistent
//!    history vector, so forking positions for lookahead drivers is O(1)
//!    in history length.
//!
//! ## The game
//!
//! 14 pits in a ring: six row pits per player and a store each. Sowing
//! drops one bean into every consecutive position - both stores included,
//! there is no skip rule - and landing in your own store grants another
//! turn. The game ends when either row is empty; the higher bean total
//! (row plus store) wins.
//!
//! ## Driving a game
//!
//! ```
//! use mancala_engine::games::MancalaGame;
//! use mancala_engine::rules::GameRules;
//!
//! let game = MancalaGame::new();
//! let mut state = game.new_initial_state();
//!
//! while !game.is_terminal(&state) {
//!     let actions = game.legal_actions(&state);
//!     game.apply_action(&mut state, actions[0]);
//! }
//!
//! let [r0, r1] = game.returns(&state);
//! assert_eq!(r0 + r1, 0.0);
//! ```
//!
//! ## Modules
//!
//! - `core`: board, players, actions, state, RNG, metadata
//! - `rules`: the `GameRules` trait and the caller-owned registry
//! - `games`: the concrete Mancala implementation
//! - `encoding`: tensor observations for numeric observers
//! - `playout`: random-playout and perft drivers

pub mod core;
pub mod encoding;
pub mod games;
pub mod playout;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Board, GameMetadata, GameRng, GameRngState, GameState, PlayerId,
    INITIAL_BEANS_PER_PIT, NUM_CELLS, NUM_PLAYERS, NUM_ROW_PITS, TOTAL_BEANS,
};

pub use crate::rules::{ActionList, GameOutcome, GameRegistry, GameRules};

pub use crate::games::MancalaGame;

pub use crate::encoding::{EncodedState, OneHotBoardEncoder, StateEncoder};

pub use crate::playout::{perft, random_playout, PlayoutResult};
