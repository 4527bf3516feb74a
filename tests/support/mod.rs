//! A small, fully-observable two-player game used only by the integration
//! tests. Unlike `demos/card_duel`, nothing here is hidden: `View = State`,
//! so `determinize` and `reconstruct_state` are both the identity. This
//! keeps the tests focused on the search machinery rather than on
//! information-set sampling, which the card duel demo already exercises.

use ismcts_engine::{Adapter, Driver, EngineError, PauseOutcome, Result, ResponseCategory};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

pub const START_HEALTH: i32 = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaAction {
    Strike,
    Power,
    EndTurn,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArenaState {
    pub health: [i32; 2],
    pub energy: [u32; 2],
    pub active: usize,
    pub completed: bool,
}

pub fn new_arena() -> ArenaState {
    ArenaState { health: [START_HEALTH, START_HEALTH], energy: [2, 2], active: 0, completed: false }
}

/// A state with the active player already out of energy, so only `EndTurn`
/// is legal — used to exercise the engine's single-legal-action shortcut.
pub fn arena_with_no_energy() -> ArenaState {
    let mut state = new_arena();
    state.energy[0] = 0;
    state
}

/// A state one power-strike away from ending the round.
pub fn arena_near_victory() -> ArenaState {
    let mut state = new_arena();
    state.health[1] = 2;
    state
}

#[derive(Clone, Default)]
pub struct ArenaAdapter;

impl Adapter for ArenaAdapter {
    type State = ArenaState;
    type Action = ArenaAction;
    type View = ArenaState;

    /// Deliberately over-generates: every category returns all three moves
    /// regardless of energy, so `legal_actions` is the thing responsible for
    /// filtering out the ones the driver would reject.
    fn generate_candidates(&self, _view: &ArenaState, _player: usize, _categories: &[ResponseCategory]) -> Vec<ArenaAction> {
        vec![ArenaAction::Strike, ArenaAction::Power, ArenaAction::EndTurn]
    }

    fn create_driver(&self, _state: &ArenaState) -> Box<dyn Driver<ArenaState, ArenaAction, ArenaState>> {
        Box::new(ArenaDriver)
    }

    fn determinize(&self, view: &ArenaState, _rng: &mut StdRng) -> ArenaState {
        view.clone()
    }

    fn reconstruct_state(&self, view: &ArenaState) -> ArenaState {
        view.clone()
    }

    fn is_round_ended(&self, state: &ArenaState) -> bool {
        state.completed
    }

    fn round_reward(&self, state: &ArenaState, player: usize) -> f64 {
        let opponent = 1 - player;
        match (state.health[player] <= 0, state.health[opponent] <= 0) {
            (true, true) => 0.5,
            (true, false) => 0.0,
            (false, true) => 1.0,
            (false, false) => 0.5,
        }
    }
}

struct ArenaDriver;

impl Driver<ArenaState, ArenaAction, ArenaState> for ArenaDriver {
    fn apply(&mut self, state: &ArenaState, player: usize, action: &ArenaAction) -> Result<ArenaState> {
        if let Some(reason) = self.validate(state, player, action) {
            return Err(EngineError::InvalidAction(reason));
        }
        let mut next = state.clone();
        let opponent = 1 - player;
        match action {
            ArenaAction::Strike => {
                next.energy[player] -= 1;
                next.health[opponent] -= 1;
            }
            ArenaAction::Power => {
                next.energy[player] -= 2;
                next.health[opponent] -= 3;
            }
            ArenaAction::EndTurn => {
                next.active = opponent;
                next.energy[opponent] = 2;
            }
        }
        Ok(next)
    }

    fn resume(&mut self, state: &ArenaState) -> Result<PauseOutcome<ArenaState>> {
        let mut next = state.clone();
        if next.health[0] <= 0 || next.health[1] <= 0 {
            next.completed = true;
            return Ok(PauseOutcome::RoundEnded { state: next });
        }
        let active = next.active;
        Ok(PauseOutcome::Waiting { state: next.clone(), player: active, categories: vec!["main".to_string()] })
    }

    fn validate(&self, state: &ArenaState, player: usize, action: &ArenaAction) -> Option<String> {
        if state.completed {
            return Some("round already ended".to_string());
        }
        if player != state.active {
            return Some(format!("player {player} is not active"));
        }
        match action {
            ArenaAction::Strike if state.energy[player] < 1 => Some("not enough energy".to_string()),
            ArenaAction::Power if state.energy[player] < 2 => Some("not enough energy".to_string()),
            _ => None,
        }
    }

    fn player_view(&self, state: &ArenaState, _player: usize) -> ArenaState {
        state.clone()
    }

    fn waiting_player(&self, state: &ArenaState) -> Option<usize> {
        if state.completed {
            None
        } else {
            Some(state.active)
        }
    }
}
