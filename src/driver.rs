//! The Driver Orchestrator (§4.1): wraps an external rules engine so the
//! rest of the core only ever sees deep-cloned state and a small,
//! deterministic set of operations.

use crate::adapter::ResponseCategory;
use crate::error::Result;

/// The result of advancing a driver's state machine.
#[derive(Debug, Clone)]
pub enum PauseOutcome<S> {
    /// The rules engine is now waiting for `player`'s response, restricted
    /// to `categories`. This is the "captured" information the selection,
    /// expansion and simulation phases use to call `generate_candidates`
    /// without re-deriving it themselves.
    Waiting { state: S, player: usize, categories: Vec<ResponseCategory> },
    /// The round ended while resuming.
    RoundEnded { state: S },
}

impl<S> PauseOutcome<S> {
    pub fn state(&self) -> &S {
        match self {
            PauseOutcome::Waiting { state, .. } => state,
            PauseOutcome::RoundEnded { state } => state,
        }
    }

    pub fn into_state(self) -> S {
        match self {
            PauseOutcome::Waiting { state, .. } => state,
            PauseOutcome::RoundEnded { state } => state,
        }
    }

    pub fn is_round_ended(&self) -> bool {
        matches!(self, PauseOutcome::RoundEnded { .. })
    }
}

/// Abstracts an external rules engine instance bound to one state-machine
/// run (§4.1). Implementations are produced by
/// [`crate::adapter::Adapter::create_driver`] and own whatever
/// automatic-phase resolution logic the concrete game requires; the core
/// only ever calls the five methods below.
///
/// Every method takes ownership of (or returns) a deep clone: no call may
/// mutate a state value owned elsewhere. This is the primary safety
/// contract — violating it causes cross-iteration contamination, which was
/// historically the dominant bug class in engines like this one.
pub trait Driver<S, A, V> {
    /// Validates then applies `action` for `player`, returning the
    /// resulting state. Does not advance past it: the caller must call
    /// `resume` separately to run any automatic phases that follow.
    fn apply(&mut self, state: &S, player: usize, action: &A) -> Result<S>;

    /// Advances the state machine through deterministic/automatic phases
    /// until it is either waiting for a player's response or the round has
    /// ended. May perform several internal transitions in one call.
    fn resume(&mut self, state: &S) -> Result<PauseOutcome<S>>;

    /// Pure check: would `apply` accept `action` for `player` in `state`?
    /// Returns the rejection reason if not, without mutating anything.
    fn validate(&self, state: &S, player: usize, action: &A) -> Option<String>;

    /// Extracts `player`'s partial view of `state`.
    fn player_view(&self, state: &S, player: usize) -> V;

    /// The first player index who must respond in `state`, or `None`.
    fn waiting_player(&self, state: &S) -> Option<usize>;
}

/// Thin wrapper around a boxed [`Driver`] providing the two derived
/// procedures built on top of the five primitives (§4.1).
pub struct DriverOrchestrator<S, A, V> {
    driver: Box<dyn Driver<S, A, V>>,
}

impl<S, A, V> DriverOrchestrator<S, A, V> {
    pub fn new(driver: Box<dyn Driver<S, A, V>>) -> Self {
        DriverOrchestrator { driver }
    }

    /// Applies `action` for `player`, then resumes. The returned
    /// [`PauseOutcome`] already carries the next decision point's response
    /// categories when applicable — this is the "capture" described in
    /// §4.1: the driver's own resume implementation is responsible for
    /// reporting what it is asking of the next player, equivalent to
    /// installing a short-lived observer on the rules engine's next
    /// request-for-input.
    pub fn apply_then_resume(
        &mut self,
        state: &S,
        player: usize,
        action: &A,
    ) -> Result<PauseOutcome<S>> {
        let applied = self.driver.apply(state, player, action)?;
        self.driver.resume(&applied)
    }

    pub fn validate(&self, state: &S, player: usize, action: &A) -> Option<String> {
        self.driver.validate(state, player, action)
    }

    pub fn player_view(&self, state: &S, player: usize) -> V {
        self.driver.player_view(state, player)
    }

    pub fn waiting_player(&self, state: &S) -> Option<usize> {
        self.driver.waiting_player(state)
    }

    pub fn resume(&mut self, state: &S) -> Result<PauseOutcome<S>> {
        self.driver.resume(state)
    }
}
