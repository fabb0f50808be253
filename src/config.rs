//! Configuration parameters for the Lin-Kernighan solver.

use serde::{Deserialize, Serialize};

/// Configuration settings for the Lin-Kernighan solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum walk position the search may backtrack to (p1)
    pub backtracking_depth: usize,
    /// Maximum even walk position at which exchanges may still be
    /// infeasible (p2)
    pub infeasibility_depth: usize,
    /// Seed for the solver's random number generator
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backtracking_depth: 5,
            infeasibility_depth: 2,
            seed: 0,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the backtracking depth.
    pub fn with_backtracking_depth(mut self, depth: usize) -> Self {
        self.backtracking_depth = depth;
        self
    }

    /// Set the infeasibility depth.
    pub fn with_infeasibility_depth(mut self, depth: usize) -> Self {
        self.infeasibility_depth = depth;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
