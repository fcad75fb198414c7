//! Core engine types: the board, players, actions, state, RNG, and metadata.
//!
//! These are the building blocks the rules engine operates on. Nothing here
//! decides legality or outcomes; that lives in `rules` and `games`.

pub mod action;
pub mod board;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use board::{Board, INITIAL_BEANS_PER_PIT, NUM_CELLS, NUM_ROW_PITS, TOTAL_BEANS};
pub use config::{ChanceMode, Dynamics, GameMetadata, Information, RewardModel, Utility};
pub use player::{PlayerId, NUM_PLAYERS};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
