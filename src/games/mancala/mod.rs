//! The two-player Mancala sowing game.
//!
//! The single concrete `GameRules` implementation in this crate:
//! - 14-cell ring, 4 beans per row pit at start, 48 beans conserved
//! - sowing passes through every ring position, both stores included
//! - landing in your own store grants another turn
//! - the game ends when either row is fully empty; higher bean total wins

mod game;

pub use game::MancalaGame;
