mod support;

use ismcts_engine::{Decision, Engine, EngineConfig};
use support::{arena_near_victory, new_arena, ArenaAdapter};

#[test]
fn every_ranked_reward_stays_within_unit_bounds() {
    let state = new_arena();
    let decision = Engine::new(ArenaAdapter, EngineConfig::default().with_iterations(150).with_seed(17))
        .decide_from_state(&state, 0)
        .expect("search succeeds");
    let Decision::Ranked(ranked) = decision else { panic!("expected a ranked decision") };

    for entry in ranked {
        assert!(entry.mean_reward >= 0.0 && entry.mean_reward <= 1.0, "{:?} out of bounds", entry.mean_reward);
    }
}

#[test]
fn an_immediately_winning_move_backpropagates_a_reward_of_one() {
    // Power deals 3 damage, lethal against 2 remaining health: every
    // iteration that expands into it sees an immediate round end with
    // reward 1.0 for the player who struck, with nothing to average away.
    let state = arena_near_victory();
    let decision = Engine::new(ArenaAdapter, EngineConfig::default().with_iterations(200).with_seed(23))
        .decide_from_state(&state, 0)
        .expect("search succeeds");
    let Decision::Ranked(ranked) = decision else { panic!("expected a ranked decision") };

    let power = ranked
        .iter()
        .find(|entry| entry.action == support::ArenaAction::Power)
        .expect("Power was searched");
    assert!(power.visits > 0);
    assert_eq!(power.mean_reward, 1.0);
}
