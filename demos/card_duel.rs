//! Card Duel: a small two-player hidden-information card game used to
//! exercise the full [`Adapter`]/[`Driver`] surface end-to-end.
//!
//! Each player has health, energy, and a private hand of cards; a turn is
//! zero or more card plays followed by an explicit end-turn. A player who
//! draws past the hand-size limit must discard automatically — a
//! tree-irrelevant sub-decision resolved inside the driver via
//! [`RandomHandler`], never surfaced as a tree node.

use ismcts_engine::strategy::{Handler, RandomHandler};
use ismcts_engine::{
    canonical, Adapter, Decision, Driver, Engine, EngineConfig, PauseOutcome, Result, ResponseCategory, Waiting,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const STARTING_HEALTH: i32 = 20;
const MAX_HAND_SIZE: usize = 5;
const MAX_TURNS: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub cost: u32,
    pub damage: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerState {
    pub health: i32,
    pub energy: u32,
    pub hand: Vec<Card>,
    pub deck: Vec<Card>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DuelState {
    pub players: [PlayerState; 2],
    pub active: usize,
    pub turn_count: u32,
    pub completed: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DuelView {
    pub player_index: usize,
    pub own: PlayerState,
    pub opponent_health: i32,
    pub opponent_energy: u32,
    pub opponent_hand_size: usize,
    pub active: usize,
    pub turn_count: u32,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelAction {
    PlayCard(usize),
    EndTurn,
    Discard(usize),
}

fn view_of(state: &DuelState, player: usize) -> DuelView {
    let opponent = 1 - player;
    DuelView {
        player_index: player,
        own: state.players[player].clone(),
        opponent_health: state.players[opponent].health,
        opponent_energy: state.players[opponent].energy,
        opponent_hand_size: state.players[opponent].hand.len(),
        active: state.active,
        turn_count: state.turn_count,
        completed: state.completed,
    }
}

/// Both seats are candidates for the mandatory discard; a player whose hand
/// is within the limit is vacuously "already responded". Modeled as
/// `Waiting::Counted` rather than `Explicit` since which seat(s) still owe a
/// response is a property of the state, not a fixed turn order.
fn discard_waiting(state: &DuelState) -> Waiting {
    let responded: Vec<usize> = (0..2).filter(|&p| state.players[p].hand.len() <= MAX_HAND_SIZE).collect();
    if responded.len() == 2 {
        Waiting::None
    } else {
        Waiting::Counted { count: 2, responded }
    }
}

fn sample_cards(count: usize, rng: &mut StdRng) -> Vec<Card> {
    (0..count)
        .map(|_| Card { cost: rng.gen_range(1..=3), damage: rng.gen_range(2..=8) })
        .collect()
}

fn placeholder_cards(count: usize) -> Vec<Card> {
    vec![Card { cost: 0, damage: 0 }; count]
}

/// Deals a fresh game: both players draw a starting hand from a freshly
/// sampled deck, player 0 acts first.
pub fn new_game(rng: &mut StdRng) -> DuelState {
    let deal = |rng: &mut StdRng| PlayerState {
        health: STARTING_HEALTH,
        energy: 2,
        hand: sample_cards(3, rng),
        deck: sample_cards(20, rng),
    };
    DuelState { players: [deal(rng), deal(rng)], active: 0, turn_count: 0, completed: false }
}

#[derive(Clone, Default)]
pub struct CardDuelAdapter;

impl Adapter for CardDuelAdapter {
    type State = DuelState;
    type Action = DuelAction;
    type View = DuelView;

    fn generate_candidates(
        &self,
        view: &DuelView,
        _player: usize,
        categories: &[ResponseCategory],
    ) -> Vec<DuelAction> {
        if categories.iter().any(|c| c == "discard") {
            return (0..view.own.hand.len()).map(DuelAction::Discard).collect();
        }
        let mut candidates: Vec<DuelAction> = (0..view.own.hand.len()).map(DuelAction::PlayCard).collect();
        candidates.push(DuelAction::EndTurn);
        candidates
    }

    fn create_driver(&self, _state: &DuelState) -> Box<dyn Driver<DuelState, DuelAction, DuelView>> {
        Box::new(DuelDriver { adapter: self.clone() })
    }

    fn determinize(&self, view: &DuelView, rng: &mut StdRng) -> DuelState {
        let opponent = PlayerState {
            health: view.opponent_health,
            energy: view.opponent_energy,
            hand: sample_cards(view.opponent_hand_size, rng),
            deck: sample_cards(20, rng),
        };
        let players = if view.player_index == 0 {
            [view.own.clone(), opponent]
        } else {
            [opponent, view.own.clone()]
        };
        DuelState { players, active: view.active, turn_count: view.turn_count, completed: view.completed }
    }

    fn reconstruct_state(&self, view: &DuelView) -> DuelState {
        let opponent = PlayerState {
            health: view.opponent_health,
            energy: view.opponent_energy,
            hand: placeholder_cards(view.opponent_hand_size),
            deck: Vec::new(),
        };
        let players = if view.player_index == 0 {
            [view.own.clone(), opponent]
        } else {
            [opponent, view.own.clone()]
        };
        DuelState { players, active: view.active, turn_count: view.turn_count, completed: view.completed }
    }

    fn is_round_ended(&self, state: &DuelState) -> bool {
        state.completed
    }

    fn round_reward(&self, state: &DuelState, player: usize) -> f64 {
        let opponent = 1 - player;
        let mine_dead = state.players[player].health <= 0;
        let theirs_dead = state.players[opponent].health <= 0;
        match (mine_dead, theirs_dead) {
            (true, true) => 0.5,
            (true, false) => 0.0,
            (false, true) => 1.0,
            (false, false) => 0.5,
        }
    }

    fn timeout_reward(&self, state: &DuelState, player: usize) -> f64 {
        let opponent = 1 - player;
        let diff = state.players[player].health - state.players[opponent].health;
        if diff > 0 {
            0.7
        } else if diff < 0 {
            0.3
        } else {
            0.5
        }
    }

    fn action_weight(&self, action: &DuelAction) -> f64 {
        match action {
            DuelAction::EndTurn => 0.3,
            DuelAction::PlayCard(_) => 1.0,
            DuelAction::Discard(_) => 1.0,
        }
    }
}

struct DuelDriver {
    adapter: CardDuelAdapter,
}

impl Driver<DuelState, DuelAction, DuelView> for DuelDriver {
    fn apply(&mut self, state: &DuelState, player: usize, action: &DuelAction) -> Result<DuelState> {
        if let Some(reason) = self.validate(state, player, action) {
            return Err(ismcts_engine::EngineError::InvalidAction(reason));
        }
        let mut next = canonical::deep_clone(state);
        match action {
            DuelAction::PlayCard(index) => {
                let card = next.players[player].hand.remove(*index);
                next.players[player].energy -= card.cost;
                let opponent = 1 - player;
                next.players[opponent].health -= card.damage as i32;
            }
            DuelAction::Discard(index) => {
                next.players[player].hand.remove(*index);
            }
            DuelAction::EndTurn => {
                let next_active = 1 - player;
                next.active = next_active;
                next.turn_count += 1;
                next.players[next_active].energy += 1;
                if let Some(drawn) = next.players[next_active].deck.pop() {
                    next.players[next_active].hand.push(drawn);
                }
            }
        }
        Ok(next)
    }

    fn resume(&mut self, state: &DuelState) -> Result<PauseOutcome<DuelState>> {
        let mut current = canonical::deep_clone(state);
        loop {
            let either_dead = current.players[0].health <= 0 || current.players[1].health <= 0;
            if either_dead || current.turn_count >= MAX_TURNS {
                current.completed = true;
                return Ok(PauseOutcome::RoundEnded { state: current });
            }

            if let Some(discarder) = discard_waiting(&current).next_player() {
                let view = view_of(&current, discarder);
                let mut handler = RandomHandler::new(&self.adapter, discarder);
                let categories = vec!["discard".to_string()];
                if let DuelAction::Discard(index) = handler.respond(&view, &categories)? {
                    current.players[discarder].hand.remove(index);
                }
                continue;
            }

            let active = current.active;
            return Ok(PauseOutcome::Waiting {
                state: current.clone(),
                player: active,
                categories: vec!["main".to_string()],
            });
        }
    }

    fn validate(&self, state: &DuelState, player: usize, action: &DuelAction) -> Option<String> {
        if state.completed {
            return Some("round has already ended".to_string());
        }
        if player != state.active {
            return Some(format!("player {player} is not active"));
        }
        match action {
            DuelAction::PlayCard(index) => {
                let hand = &state.players[player].hand;
                let Some(card) = hand.get(*index) else {
                    return Some(format!("no card at hand index {index}"));
                };
                if card.cost > state.players[player].energy {
                    return Some("not enough energy".to_string());
                }
                None
            }
            DuelAction::EndTurn => None,
            DuelAction::Discard(index) => {
                if *index >= state.players[player].hand.len() {
                    return Some(format!("no card at hand index {index}"));
                }
                None
            }
        }
    }

    fn player_view(&self, state: &DuelState, player: usize) -> DuelView {
        view_of(state, player)
    }

    fn waiting_player(&self, state: &DuelState) -> Option<usize> {
        if state.completed {
            None
        } else {
            Some(state.active)
        }
    }
}

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(7);
    let state = new_game(&mut rng);
    let adapter = CardDuelAdapter;
    let engine = Engine::new(adapter, EngineConfig::default().with_iterations(500).with_seed(7));

    match engine.decide_from_state(&state, 0) {
        Ok(Decision::NoAction) => println!("no legal action for player 0"),
        Ok(Decision::Unique(action)) => println!("player 0's only move: {action:?}"),
        Ok(Decision::Ranked(ranked)) => {
            println!("player 0's ranked moves:");
            for entry in ranked {
                println!("  {:?} -- mean reward {:.3} over {} visits", entry.action, entry.mean_reward, entry.visits);
            }
        }
        Err(error) => eprintln!("search failed: {error}"),
    }
}
