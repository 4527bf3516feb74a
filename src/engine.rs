//! The top-level search loop (§4.7): drives the four phases over an
//! [`Adapter`]-supplied game to produce a [`Decision`] for one player's
//! turn.

use std::time::Instant;

use crate::adapter::Adapter;
use crate::config::EngineConfig;
use crate::driver::{DriverOrchestrator, PauseOutcome};
use crate::error::Result;
use crate::legal_actions::legal_actions;
use crate::policy::{backpropagate, best_child, pick_unexpanded_random, simulate};
use crate::stats::SearchStatistics;
use crate::strategy::seeded_rng;
use crate::tree::Tree;

/// A ranked root action together with the statistics gathered for it.
#[derive(Debug, Clone)]
pub struct RankedAction<A> {
    pub action: A,
    pub mean_reward: f64,
    pub visits: u64,
}

/// The outcome of a decision.
#[derive(Debug, Clone)]
pub enum Decision<A> {
    /// The round has already ended, or no legal action exists; there is
    /// nothing to decide.
    NoAction,
    /// Exactly one legal action exists; it was returned without running a
    /// search (§4.7 short-circuit).
    Unique(A),
    /// Every legal action searched, ordered by mean reward descending and
    /// ties broken by visit count descending.
    Ranked(Vec<RankedAction<A>>),
}

/// Drives searches for one [`Adapter`]-defined game.
pub struct Engine<Ad: Adapter> {
    adapter: Ad,
    config: EngineConfig,
}

impl<Ad: Adapter> Engine<Ad> {
    pub fn new(adapter: Ad, config: EngineConfig) -> Self {
        Engine { adapter, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Decides `player`'s move given their partial view of the game,
    /// sampling a fresh determinization every iteration (§4.7, §9).
    pub fn decide_from_view(&self, view: &Ad::View, player: usize) -> Result<Decision<Ad::Action>> {
        self.decide_from_view_with_stats(view, player).map(|(decision, _)| decision)
    }

    /// As [`Self::decide_from_view`], also returning the statistics
    /// gathered while searching.
    pub fn decide_from_view_with_stats(
        &self,
        view: &Ad::View,
        player: usize,
    ) -> Result<(Decision<Ad::Action>, SearchStatistics)> {
        let reconstructed = self.adapter.reconstruct_state(view);
        let mut setup_orchestrator = DriverOrchestrator::new(self.adapter.create_driver(&reconstructed));
        let outcome = setup_orchestrator.resume(&reconstructed)?;
        let categories = match &outcome {
            PauseOutcome::RoundEnded { .. } => {
                log::debug!("decide_from_view: round already ended, nothing to decide");
                return Ok((Decision::NoAction, SearchStatistics::new()));
            }
            PauseOutcome::Waiting { categories, .. } => categories.clone(),
        };

        let mut root_legal = legal_actions(&self.adapter, &setup_orchestrator, view, player, &categories);
        match root_legal.len() {
            0 => return Ok((Decision::NoAction, SearchStatistics::new())),
            1 => return Ok((Decision::Unique(root_legal.remove(0)), SearchStatistics::new())),
            n => log::debug!("decide_from_view: {n} root legal actions, searching {} iterations", self.config.iterations),
        }

        let mut rng = seeded_rng(self.config.seed);
        let mut tree: Tree<Ad::Action> = Tree::new();
        let started = Instant::now();

        for _ in 0..self.config.iterations {
            let root_state = self.adapter.determinize(view, &mut rng);
            self.run_iteration(root_state, player, &root_legal, &mut tree, &mut rng);
        }

        let stats = SearchStatistics {
            iterations: self.config.iterations,
            total_time: started.elapsed(),
            tree_size: tree.len(),
            max_depth: tree.depth_below(Tree::<Ad::Action>::ROOT),
        };
        log::debug!("decide_from_view: {}", stats.summary());

        Ok((self.rank(&tree, &root_legal), stats))
    }

    /// Decides `player`'s move from a fully known state, by deriving their
    /// view and delegating to [`Self::decide_from_view`]. For a game with
    /// no hidden information this behaves as a plain MCTS search; for one
    /// with hidden information it still samples a fresh determinization
    /// per iteration, consistent with the information the adapter's view
    /// actually carries.
    pub fn decide_from_state(&self, state: &Ad::State, player: usize) -> Result<Decision<Ad::Action>> {
        let driver = self.adapter.create_driver(state);
        let orchestrator = DriverOrchestrator::new(driver);
        let view = orchestrator.player_view(state, player);
        self.decide_from_view(&view, player)
    }

    /// One determinize-select-expand-simulate-backpropagate pass (§4.7
    /// steps 3a-3e), starting from a freshly determinized `root_state`.
    fn run_iteration(
        &self,
        root_state: Ad::State,
        root_player: usize,
        root_legal: &[Ad::Action],
        tree: &mut Tree<Ad::Action>,
        rng: &mut rand::rngs::StdRng,
    ) {
        let mut orchestrator = DriverOrchestrator::new(self.adapter.create_driver(&root_state));
        let outcome = match orchestrator.resume(&root_state) {
            Ok(outcome) => outcome,
            Err(error) => {
                log::warn!("run_iteration: driver failed to align root state: {error}");
                return;
            }
        };
        if outcome.is_round_ended() {
            return;
        }

        let mut node = Tree::<Ad::Action>::ROOT;
        let mut current_player = root_player;
        let mut current_legal = root_legal.to_vec();
        let mut state = outcome.into_state();

        // Selection: descend while `node` is already fully expanded for this
        // iteration's determinization.
        loop {
            let legal_keys: std::collections::HashSet<String> =
                current_legal.iter().map(crate::canonical::canonical_key).collect();
            let legal_children = tree.legal_children(node, &legal_keys);
            if legal_children.len() < legal_keys.len() {
                break;
            }
            if legal_children.is_empty() {
                return;
            }

            let Some(child) = best_child(tree, node, &legal_children, self.config.exploration_constant) else {
                return;
            };
            let Some(action) = tree.node(child).last_action.clone() else {
                log::warn!("run_iteration: selected child has no recorded action");
                return;
            };

            let next = match orchestrator.apply_then_resume(&state, current_player, &action) {
                Ok(next) => next,
                Err(error) => {
                    log::warn!("run_iteration: selection replay failed: {error}");
                    return;
                }
            };
            node = child;

            match next {
                PauseOutcome::RoundEnded { state: ended } => {
                    let Some(player_at_node) = tree.node(node).last_player else {
                        log::warn!("run_iteration: selected child has no recorded player");
                        return;
                    };
                    let reward = self.adapter.round_reward(&ended, player_at_node);
                    backpropagate(tree, node, reward);
                    return;
                }
                PauseOutcome::Waiting { state: next_state, player: next_player, categories } => {
                    let view = orchestrator.player_view(&next_state, next_player);
                    current_legal = legal_actions(&self.adapter, &orchestrator, &view, next_player, &categories);
                    current_player = next_player;
                    state = next_state;
                }
            }
        }

        // Expansion: create exactly one new child.
        let Some(action) = pick_unexpanded_random(tree, node, &current_legal, rng).cloned() else {
            return;
        };
        let child = tree.add_child(node, current_player, action.clone());

        let outcome = match orchestrator.apply_then_resume(&state, current_player, &action) {
            Ok(outcome) => outcome,
            Err(error) => {
                log::warn!("run_iteration: expansion failed on a legal action: {error}");
                return;
            }
        };

        // Simulation, then backpropagation from the freshly expanded node.
        let reward = simulate(&self.adapter, &mut orchestrator, outcome, current_player, self.config.max_depth, rng);
        backpropagate(tree, child, reward);
    }

    /// Ranks every root legal action by its child's mean reward (visits
    /// descending as tiebreak); actions the search never expanded rank
    /// last with zero visits.
    fn rank(&self, tree: &Tree<Ad::Action>, root_legal: &[Ad::Action]) -> Decision<Ad::Action> {
        let mut ranked: Vec<RankedAction<Ad::Action>> = root_legal
            .iter()
            .map(|action| {
                let key = crate::canonical::canonical_key(action);
                match tree.find_child_by_key(Tree::<Ad::Action>::ROOT, &key) {
                    Some(index) => {
                        let node = tree.node(index);
                        RankedAction { action: action.clone(), mean_reward: node.mean_reward(), visits: node.visits }
                    }
                    None => RankedAction { action: action.clone(), mean_reward: 0.0, visits: 0 },
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.mean_reward
                .partial_cmp(&a.mean_reward)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.visits.cmp(&a.visits))
        });

        Decision::Ranked(ranked)
    }
}
