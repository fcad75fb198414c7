//! Concrete game implementations.

pub mod mancala;

pub use mancala::MancalaGame;

use crate::rules::GameRegistry;

/// Register every game this crate ships into a caller-owned registry.
pub fn register_all(registry: &mut GameRegistry) {
    registry.register("mancala", || Box::new(MancalaGame::new()));
}
