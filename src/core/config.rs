//! Game metadata: the descriptor a host framework reads at registration.
//!
//! Supplied once when a game is registered and read-only afterwards. The
//! engine never branches on these fields; they exist so a host can classify
//! the game (turn structure, information class, utility model) without
//! running it.

use serde::{Deserialize, Serialize};

/// How turns are taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dynamics {
    /// Players act one at a time.
    Sequential,
    /// All players act at once.
    Simultaneous,
}

/// Whether chance events occur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChanceMode {
    /// No chance nodes; play is fully determined by the actions taken.
    Deterministic,
    /// Some transitions are sampled.
    Stochastic,
}

/// What each player can observe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Information {
    /// Every player sees the full state.
    Perfect,
    /// Some state is hidden from some players.
    Imperfect,
}

/// How final returns relate across players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Utility {
    /// Returns sum to zero.
    ZeroSum,
    /// No constraint on the sum.
    GeneralSum,
}

/// When rewards are delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardModel {
    /// A single return when the game ends.
    Terminal,
    /// Intermediate rewards during play.
    Rewards,
}

/// Registration-time descriptor for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMetadata {
    /// Stable lookup key, e.g. `"mancala"`.
    pub short_name: String,

    /// Human-readable name.
    pub long_name: String,

    pub dynamics: Dynamics,
    pub chance_mode: ChanceMode,
    pub information: Information,
    pub utility: Utility,
    pub reward_model: RewardModel,

    pub min_players: usize,
    pub max_players: usize,

    /// Whether the game renders a textual observation.
    pub provides_observation_string: bool,

    /// Whether the game encodes a tensor observation.
    pub provides_observation_tensor: bool,
}

impl GameMetadata {
    /// Check that a raw player index is a valid seat for this game.
    #[must_use]
    pub fn is_valid_player(&self, player_index: usize) -> bool {
        player_index < self.max_players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GameMetadata {
        GameMetadata {
            short_name: "mancala".to_string(),
            long_name: "Mancala".to_string(),
            dynamics: Dynamics::Sequential,
            chance_mode: ChanceMode::Deterministic,
            information: Information::Perfect,
            utility: Utility::ZeroSum,
            reward_model: RewardModel::Terminal,
            min_players: 2,
            max_players: 2,
            provides_observation_string: true,
            provides_observation_tensor: true,
        }
    }

    #[test]
    fn test_valid_players() {
        let meta = sample();

        assert!(meta.is_valid_player(0));
        assert!(meta.is_valid_player(1));
        assert!(!meta.is_valid_player(2));
    }

    #[test]
    fn test_metadata_serialization() {
        let meta = sample();
        let json = serde_json::to_string(&meta).unwrap();
        let deserialized: GameMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(meta, deserialized);
    }
}
