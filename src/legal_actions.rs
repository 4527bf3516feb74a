//! Legal action generation (§4.2): turns an adapter's raw candidate
//! suggestions into a deduplicated, driver-validated action set.

use crate::adapter::{Adapter, ResponseCategory};
use crate::canonical::canonical_key;
use crate::driver::DriverOrchestrator;

/// Generates the legal actions available to `player` in `view`, restricted
/// to `categories`.
///
/// Candidates come from [`Adapter::generate_candidates`], which is free to
/// over-generate or include illegal moves; this function reconstructs a
/// concrete state from the view, validates every candidate against it
/// through the driver, and deduplicates by canonical key, preserving the
/// adapter's original ordering among the survivors.
pub fn legal_actions<Ad: Adapter>(
    adapter: &Ad,
    orchestrator: &DriverOrchestrator<Ad::State, Ad::Action, Ad::View>,
    view: &Ad::View,
    player: usize,
    categories: &[ResponseCategory],
) -> Vec<Ad::Action> {
    let candidates = adapter.generate_candidates(view, player, categories);
    let validation_state = adapter.reconstruct_state(view);

    let mut seen = std::collections::HashSet::new();
    let mut legal = Vec::new();
    for candidate in candidates {
        if orchestrator
            .validate(&validation_state, player, &candidate)
            .is_some()
        {
            continue;
        }
        let key = canonical_key(&candidate);
        if seen.insert(key) {
            legal.push(candidate);
        }
    }
    legal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{Driver, PauseOutcome};
    use crate::error::Result;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Serialize, Deserialize)]
    struct Num(i32);

    struct NumAdapter;

    impl Adapter for NumAdapter {
        type State = Num;
        type Action = i32;
        type View = Num;

        fn generate_candidates(&self, _view: &Num, _player: usize, _categories: &[ResponseCategory]) -> Vec<i32> {
            vec![1, 2, 2, 3, -1]
        }

        fn create_driver(&self, _state: &Num) -> Box<dyn Driver<Num, i32, Num>> {
            Box::new(NumDriver)
        }

        fn determinize(&self, view: &Num, _rng: &mut rand::rngs::StdRng) -> Num {
            view.clone()
        }

        fn reconstruct_state(&self, view: &Num) -> Num {
            view.clone()
        }

        fn is_round_ended(&self, _state: &Num) -> bool {
            false
        }

        fn round_reward(&self, _state: &Num, _player: usize) -> f64 {
            0.0
        }
    }

    struct NumDriver;

    impl Driver<Num, i32, Num> for NumDriver {
        fn apply(&mut self, state: &Num, _player: usize, action: &i32) -> Result<Num> {
            Ok(Num(state.0 + action))
        }

        fn resume(&mut self, state: &Num) -> Result<PauseOutcome<Num>> {
            Ok(PauseOutcome::Waiting { state: state.clone(), player: 0, categories: vec![] })
        }

        fn validate(&self, _state: &Num, _player: usize, action: &i32) -> Option<String> {
            if *action < 0 {
                Some("negative actions are illegal".into())
            } else {
                None
            }
        }

        fn player_view(&self, state: &Num, _player: usize) -> Num {
            state.clone()
        }

        fn waiting_player(&self, _state: &Num) -> Option<usize> {
            Some(0)
        }
    }

    #[test]
    fn deduplicates_and_validates_candidates() {
        let adapter = NumAdapter;
        let state = Num(0);
        let orchestrator = DriverOrchestrator::new(adapter.create_driver(&state));
        let actions = legal_actions(&adapter, &orchestrator, &state, 0, &[]);
        assert_eq!(actions, vec![1, 2, 3]);
    }
}
