//! Tensor observation encoding for external observers.
//!
//! A host that feeds states to a neural network (or any numeric consumer)
//! goes through `StateEncoder`. The crate ships `OneHotBoardEncoder`, the
//! one-hot bean-count grid described by the game's metadata.

pub mod encoder;

pub use encoder::{EncodedState, OneHotBoardEncoder, StateEncoder, DEFAULT_BEAN_STATES};
