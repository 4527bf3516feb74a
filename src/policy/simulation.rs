//! Simulation phase (§4.5): plays a determinized state forward with random
//! (weight-biased) moves until the round ends or a move cap is hit, then
//! reports the reward for the player the tree descent is currently scoring.

use rand::rngs::StdRng;

use crate::adapter::Adapter;
use crate::driver::{DriverOrchestrator, PauseOutcome};
use crate::legal_actions::legal_actions;
use crate::strategy::weighted_choice;

/// Plays `state` forward from `orchestrator`'s current pause point using
/// weighted-random moves, stopping at round end or after `max_depth`
/// player decisions (whichever comes first), and returns the reward for
/// `perspective_player`.
///
/// `max_depth` bounds a single simulation's length, not search depth in the
/// tree — it exists so a simulation through a pathological or cyclic game
/// state cannot hang.
pub fn simulate<Ad: Adapter>(
    adapter: &Ad,
    orchestrator: &mut DriverOrchestrator<Ad::State, Ad::Action, Ad::View>,
    mut outcome: PauseOutcome<Ad::State>,
    perspective_player: usize,
    max_depth: usize,
    rng: &mut StdRng,
) -> f64 {
    for _ in 0..max_depth {
        let (state, player, categories) = match outcome {
            PauseOutcome::RoundEnded { state } => {
                return adapter.round_reward(&state, perspective_player);
            }
            PauseOutcome::Waiting { state, player, categories } => (state, player, categories),
        };

        let view = orchestrator.player_view(&state, player);
        let candidates = legal_actions(adapter, orchestrator, &view, player, &categories);
        let Some(action) = weighted_choice(adapter, &candidates, rng) else {
            return adapter.timeout_reward(&state, perspective_player);
        };

        outcome = match orchestrator.apply_then_resume(&state, player, &action) {
            Ok(next) => next,
            Err(_) => return adapter.timeout_reward(&state, perspective_player),
        };
    }

    adapter.timeout_reward(outcome.state(), perspective_player)
}
