//! Configuration for a single engine decision (§6).
//!
//! This struct contains the parameters that control one search; use the
//! builder methods to create a customized configuration from
//! [`EngineConfig::default`].

/// Configuration for one [`crate::engine::Engine::decide_from_view`] call.
///
/// # Example
///
/// ```
/// use ismcts_engine::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_exploration_constant(1.5)
///     .with_iterations(5_000)
///     .with_max_depth(40)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Exploration constant for UCB1.
    ///
    /// Controls the balance between exploration and exploitation. Higher
    /// values favor exploration of less-visited nodes. The standard value
    /// is sqrt(2) ≈ 1.414.
    pub exploration_constant: f64,

    /// Number of determinize-select-expand-simulate-backpropagate
    /// iterations to run for this decision.
    pub iterations: usize,

    /// Caps how many player decisions a single simulation rollout plays
    /// before falling back to `Adapter::timeout_reward`. Does not bound the
    /// tree's own depth, only a single simulation's length.
    pub max_depth: usize,

    /// Explicit RNG seed for reproducible search. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            exploration_constant: std::f64::consts::SQRT_2,
            iterations: 10_000,
            max_depth: 200,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the exploration constant.
    pub fn with_exploration_constant(mut self, constant: f64) -> Self {
        self.exploration_constant = constant;
        self
    }

    /// Sets the number of iterations to run.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the simulation move-count cap.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets an explicit RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
