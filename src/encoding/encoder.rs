//! Observation encoding for external observers.
//!
//! Transforms game state into tensor representations suitable for neural
//! network input or any other numeric observer.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId, NUM_CELLS, NUM_PLAYERS, TOTAL_BEANS};

/// Bean-count slots the default encoder reserves per cell: every count a
/// conserved 48-bean board can reach, plus zero.
pub const DEFAULT_BEAN_STATES: usize = TOTAL_BEANS as usize + 1;

/// Encoded game state as a flat tensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor (e.g., [bean_states, cells]).
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    #[must_use]
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    #[must_use]
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Get element at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }
}

/// Encodes game state into tensors from a player's perspective.
pub trait StateEncoder: Send + Sync {
    /// Encode the game state from a player's perspective.
    ///
    /// Panics if `perspective` is not a valid seat.
    fn encode(&self, state: &GameState, perspective: PlayerId) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of action ids the policy head must cover.
    fn action_space_size(&self) -> usize;
}

/// One-hot bean-count encoder.
///
/// Produces a `[bean_states, 14]` grid with a single 1.0 per cell column at
/// row `bean count at that cell`. The game is perfect-information, so both
/// perspectives see the same tensor; the perspective argument is only
/// bounds-checked.
///
/// Counts at or above `bean_states` have no slot and are left unencoded;
/// the default ceiling covers every count a conserved board can reach.
#[derive(Clone, Debug)]
pub struct OneHotBoardEncoder {
    bean_states: usize,
}

impl OneHotBoardEncoder {
    /// Create an encoder with the default bean-state ceiling.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bean_states: DEFAULT_BEAN_STATES,
        }
    }

    /// Override the bean-state ceiling.
    #[must_use]
    pub fn with_bean_states(mut self, bean_states: usize) -> Self {
        self.bean_states = bean_states;
        self
    }
}

impl Default for OneHotBoardEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl StateEncoder for OneHotBoardEncoder {
    fn encode(&self, state: &GameState, perspective: PlayerId) -> EncodedState {
        assert!(
            perspective.index() < NUM_PLAYERS,
            "player index out of range: {}",
            perspective.0
        );

        let mut encoded = EncodedState::zeros(vec![self.bean_states, NUM_CELLS]);
        for cell in 0..NUM_CELLS {
            let beans = state.board().beans(cell) as usize;
            if beans < self.bean_states {
                encoded.tensor[beans * NUM_CELLS + cell] = 1.0;
            }
        }
        encoded
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![self.bean_states, NUM_CELLS]
    }

    fn action_space_size(&self) -> usize {
        NUM_CELLS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Board};
    use crate::games::MancalaGame;
    use crate::rules::GameRules;

    #[test]
    fn test_encoded_state_zeros() {
        let encoded = EncodedState::zeros(vec![3, 4]);

        assert_eq!(encoded.len(), 12);
        assert_eq!(encoded.shape, vec![3, 4]);
        assert!(encoded.tensor.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_one_hot_shape() {
        let encoder = OneHotBoardEncoder::new();

        assert_eq!(encoder.output_shape(), vec![49, 14]);
        assert_eq!(encoder.action_space_size(), 14);
    }

    #[test]
    fn test_one_hot_initial_board() {
        let encoder = OneHotBoardEncoder::new();
        let state = GameState::new();
        let encoded = encoder.encode(&state, PlayerId::new(0));

        // Stores (cells 0 and 7) are empty: row 0 of the grid.
        assert_eq!(encoded.get(0), Some(1.0));
        assert_eq!(encoded.get(7), Some(1.0));

        // Row pits hold 4 beans: row 4 of the grid.
        for cell in [1, 2, 3, 4, 5, 6, 8, 9, 10, 11, 12, 13] {
            assert_eq!(encoded.get(4 * NUM_CELLS + cell), Some(1.0));
            assert_eq!(encoded.get(cell), Some(0.0));
        }

        // Exactly one hot entry per cell.
        let ones = encoded.tensor.iter().filter(|&&v| v == 1.0).count();
        assert_eq!(ones, NUM_CELLS);
    }

    #[test]
    fn test_one_hot_tracks_sowing() {
        let encoder = OneHotBoardEncoder::new();
        let game = MancalaGame::new();
        let mut state = game.new_initial_state();
        game.apply_action(&mut state, Action::new(3));

        let encoded = encoder.encode(&state, PlayerId::new(1));

        // Pit 3 emptied, pit 4 raised to 5, store 7 holds 1.
        assert_eq!(encoded.get(3), Some(1.0));
        assert_eq!(encoded.get(5 * NUM_CELLS + 4), Some(1.0));
        assert_eq!(encoded.get(NUM_CELLS + 7), Some(1.0));
    }

    #[test]
    fn test_perspectives_agree() {
        let encoder = OneHotBoardEncoder::new();
        let state = GameState::new();

        let p0 = encoder.encode(&state, PlayerId::new(0));
        let p1 = encoder.encode(&state, PlayerId::new(1));
        assert_eq!(p0, p1);
    }

    #[test]
    fn test_counts_beyond_ceiling_left_unencoded() {
        let encoder = OneHotBoardEncoder::new().with_bean_states(4);
        let mut pits = [0u8; NUM_CELLS];
        pits[2] = 9;
        let state = GameState::with_board(Board::from_pits(pits), PlayerId::new(0));

        let encoded = encoder.encode(&state, PlayerId::new(0));

        assert_eq!(encoded.shape, vec![4, NUM_CELLS]);
        // Cell 2's column carries no hot entry at all.
        for row in 0..4 {
            assert_eq!(encoded.get(row * NUM_CELLS + 2), Some(0.0));
        }
    }

    #[test]
    #[should_panic(expected = "player index out of range")]
    fn test_bad_perspective_panics() {
        let encoder = OneHotBoardEncoder::new();
        let state = GameState::new();
        let _ = encoder.encode(&state, PlayerId::new(7));
    }

    #[test]
    fn test_encoded_state_serialization() {
        let encoder = OneHotBoardEncoder::new();
        let encoded = encoder.encode(&GameState::new(), PlayerId::new(0));

        let json = serde_json::to_string(&encoded).unwrap();
        let deserialized: EncodedState = serde_json::from_str(&json).unwrap();
        assert_eq!(encoded, deserialized);
    }
}
