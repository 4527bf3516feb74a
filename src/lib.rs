//! # ismcts-engine
//!
//! An Information Set Monte Carlo Tree Search (ISMCTS) engine for
//! two-player, imperfect-information games. The core is entirely
//! game-agnostic: it never references a concrete game type, only the
//! [`Adapter`] and [`Driver`] traits a game implementation supplies.
//!
//! ## How it works
//!
//! Each call to [`Engine::decide_from_view`] runs four phases per
//! iteration, building up a search tree rooted at the acting player's
//! current decision:
//!
//! 1. **Determinization**: samples a concrete game state consistent with
//!    the player's partial view, materializing whatever hidden information
//!    (opponent hands, a shuffled deck) the view does not resolve.
//! 2. **Selection**: descends the tree by UCB1 until it reaches a node with
//!    an un-expanded legal action.
//! 3. **Expansion**: creates exactly one new child there.
//! 4. **Simulation**: plays the game forward with random moves to estimate
//!    a reward.
//! 5. **Backpropagation**: updates visit counts and rewards back to the
//!    root, flipping the reward's sign each time the acting player changes.
//!
//! ## Basic usage
//!
//! ```ignore
//! use ismcts_engine::{Engine, EngineConfig};
//!
//! let engine = Engine::new(my_adapter, EngineConfig::default().with_iterations(2_000));
//! let decision = engine.decide_from_view(&view, player)?;
//! ```
//!
//! A concrete worked example lives in `demos/card_duel.rs`.

pub mod adapter;
pub mod canonical;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod legal_actions;
pub mod policy;
pub mod stats;
pub mod strategy;
pub mod tree;
pub mod utils;
pub mod waiting;

pub use adapter::{Adapter, ResponseCategory};
pub use config::EngineConfig;
pub use driver::{Driver, DriverOrchestrator, PauseOutcome};
pub use engine::{Decision, Engine, RankedAction};
pub use error::{EngineError, Result};
pub use stats::SearchStatistics;
pub use waiting::Waiting;
