//! Statistics collected while deciding (§6).

use std::time::Duration;

/// Statistics about a single [`crate::engine::Engine::decide_from_view`] call.
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of iterations performed.
    pub iterations: usize,

    /// Total wall-clock time spent searching.
    pub total_time: Duration,

    /// Total number of nodes in the tree, including the root.
    pub tree_size: usize,

    /// Maximum depth reached in the tree, in edges from the root.
    pub max_depth: usize,
}

impl SearchStatistics {
    pub fn new() -> Self {
        SearchStatistics {
            iterations: 0,
            total_time: Duration::from_secs(0),
            tree_size: 1,
            max_depth: 0,
        }
    }

    /// Average time per iteration in microseconds.
    pub fn avg_time_per_iteration_us(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.total_time.as_micros() as f64 / self.iterations as f64
    }

    /// Iterations completed per second.
    pub fn iterations_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.iterations as f64 / self.total_time.as_secs_f64()
    }

    pub fn summary(&self) -> String {
        format!(
            "search statistics:\n\
             - iterations: {}\n\
             - total time: {:.3} seconds\n\
             - tree size: {} nodes\n\
             - max depth: {}\n\
             - avg time per iteration: {:.3} µs\n\
             - iterations per second: {:.1}",
            self.iterations,
            self.total_time.as_secs_f64(),
            self.tree_size,
            self.max_depth,
            self.avg_time_per_iteration_us(),
            self.iterations_per_second(),
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
