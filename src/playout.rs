//! Host-driver utilities: random playouts and move counting.
//!
//! These drive a game through the `GameRules` loop the same way an external
//! host would. They carry no evaluation or search - `random_playout` picks
//! uniformly among legal actions, `perft` just counts decision paths.

use crate::core::{GameRng, GameState};
use crate::rules::{GameOutcome, GameRules};

/// Result of one random playout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayoutResult {
    /// Final outcome, or `None` if the move cap was reached first.
    pub outcome: Option<GameOutcome>,

    /// Sowing moves applied during the playout.
    pub moves: u32,
}

/// Play uniformly random legal moves until the game ends or `max_moves`
/// have been applied. The state is advanced in place.
pub fn random_playout(
    game: &dyn GameRules,
    state: &mut GameState,
    rng: &mut GameRng,
    max_moves: u32,
) -> PlayoutResult {
    let mut moves = 0;

    loop {
        if let Some(outcome) = game.outcome(state) {
            return PlayoutResult {
                outcome: Some(outcome),
                moves,
            };
        }
        if moves >= max_moves {
            return PlayoutResult {
                outcome: None,
                moves,
            };
        }

        let actions = game.legal_actions(state);
        let action = *rng
            .choose(&actions)
            .expect("non-terminal state must have legal actions");
        game.apply_action(state, action);
        moves += 1;
    }
}

/// Count decision paths of length `depth` from a state. Terminal states
/// reached early count as single leaves.
#[must_use]
pub fn perft(game: &dyn GameRules, state: &GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let actions = game.legal_actions(state);
    if actions.is_empty() {
        return 1;
    }

    actions
        .iter()
        .map(|&action| {
            let mut child = state.clone();
            game.apply_action(&mut child, action);
            perft(game, &child, depth - 1)
        })
        .sum()
}
