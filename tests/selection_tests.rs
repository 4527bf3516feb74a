mod support;

use ismcts_engine::{Decision, Engine, EngineConfig};
use support::{new_arena, ArenaAdapter};

#[test]
fn a_longer_search_grows_a_strictly_larger_tree() {
    let state = new_arena();

    let (short_decision, short_stats) = Engine::new(ArenaAdapter, EngineConfig::default().with_iterations(5).with_seed(11))
        .decide_from_view_with_stats(&state, 0)
        .expect("short search succeeds");
    let (long_decision, long_stats) = Engine::new(ArenaAdapter, EngineConfig::default().with_iterations(300).with_seed(11))
        .decide_from_view_with_stats(&state, 0)
        .expect("long search succeeds");

    assert!(matches!(short_decision, Decision::Ranked(_)));
    assert!(matches!(long_decision, Decision::Ranked(_)));
    assert!(long_stats.tree_size > short_stats.tree_size);
}

#[test]
fn selection_never_outpaces_one_new_node_per_iteration() {
    let state = new_arena();
    let iterations = 120;
    let (_, stats) = Engine::new(ArenaAdapter, EngineConfig::default().with_iterations(iterations).with_seed(5))
        .decide_from_view_with_stats(&state, 0)
        .expect("search succeeds");

    // One root plus at most one expansion per iteration.
    assert!(stats.tree_size <= iterations + 1);
}
