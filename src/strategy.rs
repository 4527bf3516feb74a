//! Decision strategies and handlers (§6: `GenericHandlerFactory` and
//! `DecisionStrategy`).
//!
//! A [`Handler`] answers a single request for input — a view and the
//! categories it is restricted to — with a concrete action. Game adapters
//! install handlers into the rules engine they wrap so that automatic,
//! non-tree-relevant sub-decisions (a mandatory discard, a forced response)
//! can resolve themselves during `resume` without the search engine ever
//! seeing them as tree nodes. The search engine itself drives every
//! tree-relevant decision explicitly through `DriverOrchestrator`, so it
//! never needs to install a handler of its own — `resume`'s `PauseOutcome`
//! already reports what the *next* tree-relevant decision needs (this is
//! the "capture" of §4.1).
//!
//! Three implementations ship, corresponding to the three `DecisionStrategy`
//! variants of §6:
//! - [`RandomHandler`]: answers with a uniformly (or weight-biased) random
//!   legal action. Adapters use this for automatic sub-decisions; engine
//!   code also uses the same selection logic directly during simulation.
//! - The "Capture" strategy has no handler type of its own here: its job is
//!   folded into `Driver::resume`'s `PauseOutcome::Waiting` variant, which
//!   already reports the categories a capture observer would have recorded.
//! - [`recursive_search`]: a `Search`-style strategy that delegates to a
//!   fresh engine invocation. Not used by the core algorithm; available for
//!   adapters that want a stronger automatic sub-decision policy than
//!   uniform random play.

use rand::rngs::StdRng;
use rand::Rng;

use crate::adapter::{Adapter, ResponseCategory};
use crate::error::{EngineError, Result};

/// Answers a single request for a player's input.
pub trait Handler<A, V> {
    /// Returns [`EngineError::NoActions`] if the adapter offered no
    /// candidate for the requested categories.
    fn respond(&mut self, view: &V, categories: &[ResponseCategory]) -> Result<A>;
}

/// Picks uniformly among legal actions, optionally biased by
/// [`Adapter::action_weight`]. This is the engine's default policy for
/// resolving automatic sub-decisions and is reused directly (not through
/// the `Handler` trait) by the simulation phase (§4.5).
pub struct RandomHandler<'a, Ad: Adapter> {
    adapter: &'a Ad,
    player: usize,
}

impl<'a, Ad: Adapter> RandomHandler<'a, Ad> {
    pub fn new(adapter: &'a Ad, player: usize) -> Self {
        RandomHandler { adapter, player }
    }
}

impl<'a, Ad: Adapter> Handler<Ad::Action, Ad::View> for RandomHandler<'a, Ad> {
    fn respond(&mut self, view: &Ad::View, categories: &[ResponseCategory]) -> Result<Ad::Action> {
        let candidates = self.adapter.generate_candidates(view, self.player, categories);
        weighted_choice(self.adapter, &candidates, &mut rand::thread_rng()).ok_or(EngineError::NoActions)
    }
}

/// Picks a weighted-random element of `candidates` using `adapter`'s action
/// weights, drawing from `rng`. Returns `None` if `candidates` is empty.
pub fn weighted_choice<Ad: Adapter, R: Rng + ?Sized>(
    adapter: &Ad,
    candidates: &[Ad::Action],
    rng: &mut R,
) -> Option<Ad::Action> {
    if candidates.is_empty() {
        return None;
    }
    let weights: Vec<f64> = candidates.iter().map(|a| adapter.action_weight(a)).collect();
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return candidates.first().cloned();
    }
    let mut threshold = rng.gen_range(0.0..total);
    for (candidate, weight) in candidates.iter().zip(weights.iter()) {
        if threshold < *weight {
            return Some(candidate.clone());
        }
        threshold -= weight;
    }
    candidates.last().cloned()
}

/// A `Search`-style decision strategy: answers a request by delegating to
/// `decide`, a fresh recursive engine invocation supplied by the caller.
/// Demonstrates the extension point named in §6; the base engine never
/// constructs this itself.
pub fn recursive_search<A, V>(
    view: &V,
    categories: &[ResponseCategory],
    decide: impl FnOnce(&V, &[ResponseCategory]) -> Result<Option<A>>,
) -> Result<A> {
    decide(view, categories)?.ok_or(EngineError::NoActions)
}

/// Draws a seeded RNG either from an explicit seed or from entropy,
/// matching the determinism requirement of §5/§9: the engine always owns
/// one explicit pseudo-random source.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    use rand::SeedableRng;
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
