//! Mancala rules implementation.

use crate::core::{
    Action, Board, ChanceMode, Dynamics, GameMetadata, GameState, Information, PlayerId,
    RewardModel, Utility,
};
use crate::rules::{ActionList, GameOutcome, GameRules};

/// The two-player bean-sowing game.
///
/// Sowing deposits into every ring position, both stores included; there is
/// no skip-opponent-store rule and no capture. A sow that lands in the
/// mover's own store earns another turn.
#[derive(Clone, Debug)]
pub struct MancalaGame {
    metadata: GameMetadata,
}

impl MancalaGame {
    /// Create the game with its standard metadata.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata: GameMetadata {
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
            },
        }
    }

    /// Decimal rendering of an action id.
    #[must_use]
    pub fn action_to_string(&self, _player: PlayerId, action: Action) -> String {
        action.to_string()
    }

    /// The three-line board dump, from any player's perspective.
    ///
    /// Panics if `player` is not a valid seat.
    #[must_use]
    pub fn observation_string(&self, state: &GameState, player: PlayerId) -> String {
        self.assert_valid_player(player);
        state.board().to_string()
    }

    /// The comma-joined action history. Under perfect information this is a
    /// complete information state for either player.
    ///
    /// Panics if `player` is not a valid seat.
    #[must_use]
    pub fn information_state_string(&self, state: &GameState, player: PlayerId) -> String {
        self.assert_valid_player(player);
        state.history_string()
    }

    /// Rewind the most recent sowing move, restoring the board, the player
    /// to move, and the move counter together from the history snapshot.
    ///
    /// Returns the undone action, or `None` if no moves have been applied.
    pub fn undo_action(&self, state: &mut GameState) -> Option<Action> {
        state.pop_and_restore()
    }

    fn assert_valid_player(&self, player: PlayerId) {
        assert!(
            self.metadata.is_valid_player(player.index()),
            "player index out of range: {}",
            player.0
        );
    }
}

impl Default for MancalaGame {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRules for MancalaGame {
    fn metadata(&self) -> &GameMetadata {
        &self.metadata
    }

    fn new_initial_state(&self) -> GameState {
        GameState::new()
    }

    fn legal_actions(&self, state: &GameState) -> ActionList {
        // Terminality short-circuits legality: a finished game has no moves
        // even when the non-exhausted row still holds beans.
        if self.is_terminal(state) {
            return ActionList::new();
        }

        Board::row_pits(state.current_player())
            .filter(|&pit| state.board().beans(pit) > 0)
            .map(|pit| Action::new(pit as u8))
            .collect()
    }

    fn apply_action(&self, state: &mut GameState, action: Action) {
        state.record_move(action);

        let mover = state.current_player();
        let landing = state.board_mut().sow(action.pit());

        if landing != Board::home_pit(mover) {
            state.set_current_player(mover.opponent());
        }
        state.bump_move_counter();
    }

    fn outcome(&self, state: &GameState) -> Option<GameOutcome> {
        let board = state.board();
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        if !board.row_is_empty(p0) && !board.row_is_empty(p1) {
            return None;
        }

        let score0 = board.score(p0);
        let score1 = board.score(p1);
        Some(match score0.cmp(&score1) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(p0),
            std::cmp::Ordering::Less => GameOutcome::Winner(p1),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        })
    }
}
