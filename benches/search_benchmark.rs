#[macro_use]
extern crate criterion;

use criterion::{black_box, BenchmarkId, Criterion};
use ismcts_engine::{Adapter, Driver, EngineConfig, Engine, EngineError, PauseOutcome, Result, ResponseCategory};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A synthetic fully-observable game of fixed branching factor and depth,
/// used only to exercise the search loop's raw throughput.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct BenchState {
    depth: usize,
    branching_factor: usize,
    max_depth: usize,
    player: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct BenchAction(usize);

#[derive(Clone)]
struct BenchAdapter;

impl Adapter for BenchAdapter {
    type State = BenchState;
    type Action = BenchAction;
    type View = BenchState;

    fn generate_candidates(&self, view: &BenchState, _player: usize, _categories: &[ResponseCategory]) -> Vec<BenchAction> {
        (0..view.branching_factor).map(BenchAction).collect()
    }

    fn create_driver(&self, _state: &BenchState) -> Box<dyn Driver<BenchState, BenchAction, BenchState>> {
        Box::new(BenchDriver)
    }

    fn determinize(&self, view: &BenchState, _rng: &mut StdRng) -> BenchState {
        view.clone()
    }

    fn reconstruct_state(&self, view: &BenchState) -> BenchState {
        view.clone()
    }

    fn is_round_ended(&self, state: &BenchState) -> bool {
        state.depth >= state.max_depth
    }

    fn round_reward(&self, state: &BenchState, player: usize) -> f64 {
        if state.player == player {
            0.75
        } else {
            0.25
        }
    }
}

struct BenchDriver;

impl Driver<BenchState, BenchAction, BenchState> for BenchDriver {
    fn apply(&mut self, state: &BenchState, _player: usize, action: &BenchAction) -> Result<BenchState> {
        if state.depth >= state.max_depth {
            return Err(EngineError::InvalidAction("terminal state has no actions".into()));
        }
        let mut next = state.clone();
        next.depth += 1;
        next.player = (state.player + action.0) % 2;
        Ok(next)
    }

    fn resume(&mut self, state: &BenchState) -> Result<PauseOutcome<BenchState>> {
        if state.depth >= state.max_depth {
            Ok(PauseOutcome::RoundEnded { state: state.clone() })
        } else {
            let player = state.player;
            Ok(PauseOutcome::Waiting { state: state.clone(), player, categories: vec!["main".to_string()] })
        }
    }

    fn validate(&self, state: &BenchState, _player: usize, _action: &BenchAction) -> Option<String> {
        if state.depth >= state.max_depth {
            Some("terminal state has no actions".into())
        } else {
            None
        }
    }

    fn player_view(&self, state: &BenchState, _player: usize) -> BenchState {
        state.clone()
    }

    fn waiting_player(&self, state: &BenchState) -> Option<usize> {
        if state.depth >= state.max_depth {
            None
        } else {
            Some(state.player)
        }
    }
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("ismcts_search");
    group.measurement_time(Duration::from_secs(10));

    for branching_factor in [2, 3, 5] {
        let state = BenchState { depth: 0, branching_factor, max_depth: 4, player: 0 };
        let engine = Engine::new(BenchAdapter, EngineConfig::default().with_iterations(500).with_seed(1));

        group.bench_with_input(BenchmarkId::new("branching_factor", branching_factor), &branching_factor, |b, _| {
            b.iter(|| black_box(engine.decide_from_state(&state, 0).expect("search succeeds")))
        });
    }

    for iterations in [100, 500, 2000] {
        let state = BenchState { depth: 0, branching_factor: 3, max_depth: 4, player: 0 };

        group.bench_with_input(BenchmarkId::new("iterations", iterations), &iterations, |b, &iterations| {
            let engine = Engine::new(BenchAdapter, EngineConfig::default().with_iterations(iterations).with_seed(1));
            b.iter(|| black_box(engine.decide_from_state(&state, 0).expect("search succeeds")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
