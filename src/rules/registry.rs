//! Caller-owned game registry.
//!
//! A `GameRegistry` maps game names to constructors. It is an ordinary
//! value the caller creates, fills, and passes around; there is no
//! process-wide registration table and nothing runs at startup.

use rustc_hash::FxHashMap;

use super::engine::GameRules;

/// Constructor stored per game name.
pub type GameFactory = Box<dyn Fn() -> Box<dyn GameRules> + Send + Sync>;

/// Registry of game constructors.
///
/// ## Example
///
/// ```
/// use mancala_engine::games::MancalaGame;
/// use mancala_engine::rules::{GameRegistry, GameRules};
///
/// let mut registry = GameRegistry::new();
/// registry.register("mancala", || Box::new(MancalaGame::new()));
///
/// let game = registry.create("mancala").unwrap();
/// assert_eq!(game.metadata().short_name, "mancala");
/// ```
#[derive(Default)]
pub struct GameRegistry {
    factories: FxHashMap<String, GameFactory>,
}

impl GameRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a game constructor under a name.
    ///
    /// Panics if the name is already taken.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn GameRules> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            panic!("Game {:?} already registered", name);
        }
        self.factories.insert(name, Box::new(factory));
    }

    /// Construct the game registered under `name`.
    #[must_use]
    pub fn create(&self, name: &str) -> Option<Box<dyn GameRules>> {
        self.factories.get(name).map(|factory| factory())
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, unordered.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Number of registered games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
