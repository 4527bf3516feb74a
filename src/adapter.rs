//! Plug-in contracts a game implementation supplies to the search engine
//! (§6). The core imports no game-specific symbol; every concrete game is
//! consumed entirely through the [`Adapter`] trait and the [`Driver`] it
//! constructs.

use std::fmt::Debug;

use rand::rngs::StdRng;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::driver::Driver;

/// A discriminator drawn from a closed set of kinds a game can request a
/// response in (the `type` tag of a response message, see §3).
pub type ResponseCategory = String;

/// The capability set a game implementation supplies to the engine.
///
/// Each method corresponds to one plug-in interface from §6:
/// `generate_candidates` is the `CandidateActionGenerator`, `create_driver`
/// is the `DriverFactory`, `determinize` is the `Determinizer`,
/// `reconstruct_state` is the `ViewToStateReconstructor`, `is_round_ended`
/// is the `RoundEndDetector`, `round_reward`/`timeout_reward` are the
/// `RoundRewardCalculator`/`TimeoutRewardCalculator`, and `action_weight` is
/// the `ActionWeight` plug-in. The engine never downcasts; it only ever
/// calls through this trait.
pub trait Adapter {
    /// Opaque, deep-cloneable game state. The core never inspects its
    /// fields; it only serializes it for canonical equality and deep clone.
    type State: Clone + Serialize + DeserializeOwned;

    /// Opaque response message. Two actions are the same move iff their
    /// canonical serializations coincide (§3).
    type Action: Clone + Debug + Serialize + DeserializeOwned;

    /// The acting player's partial view of state, as handed out by the
    /// external rules engine whenever it pauses for input.
    type View: Clone + Serialize + DeserializeOwned;

    /// Enumerates candidate actions restricted to `categories`. Need not be
    /// minimal or validated; [`crate::legal_actions::legal_actions`]
    /// deduplicates and validates against the driver.
    fn generate_candidates(
        &self,
        view: &Self::View,
        player: usize,
        categories: &[ResponseCategory],
    ) -> Vec<Self::Action>;

    /// Builds a driver bound to a clone of `state`. Per the `DriverFactory`
    /// contract, the returned driver must not retain a reference to the
    /// caller's `state` value after this call returns.
    fn create_driver(&self, state: &Self::State) -> Box<dyn Driver<Self::State, Self::Action, Self::View>>;

    /// Materializes a complete, paused game state consistent with `view`,
    /// sampling whatever hidden information the view does not resolve.
    /// Different calls may return different states; any hidden-information
    /// randomness must be drawn from `rng` for reproducibility (§5, §9).
    fn determinize(&self, view: &Self::View, rng: &mut StdRng) -> Self::State;

    /// Reconstructs a full validation state from a player view, for use by
    /// legal-action generation (§4.2). Unlike `determinize`, this is used
    /// purely to obtain *a* state the driver can validate candidates
    /// against; it need not be representative of the true hidden
    /// information distribution.
    fn reconstruct_state(&self, view: &Self::View) -> Self::State;

    /// Whether the round has ended in `state`.
    fn is_round_ended(&self, state: &Self::State) -> bool;

    /// The reward in `[0, 1]` for `player` given a state where the round has
    /// ended (1 = win, 0 = loss, 0.5 = draw).
    fn round_reward(&self, state: &Self::State, player: usize) -> f64;

    /// The reward in `[0, 1]` for `player` when a simulation is cut off by
    /// the move-count cap before the round ends. Defaults to `round_reward`.
    fn timeout_reward(&self, state: &Self::State, player: usize) -> f64 {
        self.round_reward(state, player)
    }

    /// A positive weight used to bias the random simulation policy away
    /// from (or towards) a given action. Defaults to `1.0` for every
    /// action, i.e. uniform random play.
    fn action_weight(&self, _action: &Self::Action) -> f64 {
        1.0
    }
}
