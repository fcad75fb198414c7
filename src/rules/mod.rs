//! Rules engine boundary and game lookup.
//!
//! `GameRules` is the capability interface a host drives; `GameRegistry`
//! is the caller-owned name-to-constructor table that replaces any global
//! registration scheme.

pub mod engine;
pub mod registry;

pub use engine::{ActionList, GameOutcome, GameRules};
pub use registry::{GameFactory, GameRegistry};
