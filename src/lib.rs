//! # LK-TSP
//!
//! A Rust implementation of the Lin-Kernighan heuristic for the symmetric
//! Traveling Salesman Problem.
//!
//! The solver follows the variant with bounded backtracking described in
//! Korte & Vygen, "Combinatorial Optimization", with backtracking depth
//! p1 = 5 and infeasibility depth p2 = 2: tours are improved by
//! gain-directed alternating-walk searches restricted to a precomputed
//! candidate edge set, and a trial driver restarts the search from
//! randomized tours biased toward the best tour found so far.

pub mod alpha;
pub mod candidates;
pub mod config;
pub mod error;
pub mod problem;
pub mod random_tour;
pub mod search;
pub mod tour;
pub mod utils;
pub mod walk;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::candidates::CandidateEdges;
use crate::config::Config;
use crate::error::{Result, SolverError};
use crate::problem::{Distance, Problem};
use crate::random_tour::RandomTourGenerator;
use crate::search::LkSearch;
use crate::tour::Tour;

/// The main solver structure: runs Lin-Kernighan trials and keeps the
/// best tour found across them.
///
/// The incumbent best tour persists across `find_best_tour` calls; it
/// biases start-tour generation and forbids the search from first
/// breaking an edge that lies on it. All randomness comes from a single
/// RNG seeded from the configuration, so runs with the same seed,
/// problem, and candidate set are reproducible.
pub struct LinKernighan {
    pub problem: Problem,
    pub candidate_edges: CandidateEdges,
    pub config: Config,
    current_best_tour: Option<Tour>,
    current_best_length: Distance,
    rng: ChaCha8Rng,
    search: LkSearch,
    cancel_flag: Arc<AtomicBool>,
}

impl LinKernighan {
    /// Create a new solver with the default configuration.
    pub fn new(problem: Problem, candidate_edges: CandidateEdges) -> Self {
        Self::with_config(problem, candidate_edges, Config::default())
    }

    /// Create a new solver with the given configuration.
    pub fn with_config(problem: Problem, candidate_edges: CandidateEdges, config: Config) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let search = LkSearch::new(&config);

        LinKernighan {
            problem,
            candidate_edges,
            config,
            current_best_tour: None,
            current_best_length: Distance::MAX,
            rng,
            search,
            cancel_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Run up to `number_of_trials` trials and return the best tour seen.
    ///
    /// Each trial generates a randomized start tour and improves it to a
    /// local optimum. The driver stops early once the best length is
    /// within `acceptable_error` (relative) of `optimum_tour_length`, or
    /// when cancellation is requested between trials. In verbose mode one
    /// progress line is printed per trial.
    pub fn find_best_tour(
        &mut self,
        number_of_trials: usize,
        optimum_tour_length: Distance,
        acceptable_error: f64,
        verbose: bool,
    ) -> Result<Tour> {
        if number_of_trials < 1 {
            return Err(SolverError::InvalidArgument(
                "the number of trials cannot be lower than 1".to_string(),
            ));
        }

        for trial in 1..=number_of_trials {
            if self.cancel_flag.load(Ordering::Relaxed) {
                break;
            }

            let start_tour = RandomTourGenerator::generate(
                &self.problem,
                &self.candidate_edges,
                self.current_best_tour.as_ref(),
                &mut self.rng,
            );
            let start_length = self.problem.length(&start_tour);

            let improved = self.search.improve_tour(
                &self.problem,
                &self.candidate_edges,
                self.current_best_tour.as_ref(),
                start_tour,
            )?;
            let improved_length = self.problem.length(&improved);

            if improved_length < self.current_best_length {
                self.current_best_tour = Some(improved);
                self.current_best_length = improved_length;
            }

            if verbose {
                println!(
                    "Trial {} | start tour length: {} | improved tour length: {} | best tour length: {}",
                    trial, start_length, improved_length, self.current_best_length
                );
            }

            if (self.current_best_length as f64)
                <= (1.0 + acceptable_error) * optimum_tour_length as f64
            {
                break;
            }
        }

        self.current_best_tour.clone().ok_or_else(|| {
            SolverError::InvalidArgument("cancelled before any trial completed".to_string())
        })
    }

    /// Get the best tour found so far, if any trial has completed.
    pub fn best_tour(&self) -> Option<&Tour> {
        self.current_best_tour.as_ref()
    }

    /// Get the length of the best tour found so far.
    pub fn best_length(&self) -> Option<Distance> {
        self.current_best_tour
            .as_ref()
            .map(|_| self.current_best_length)
    }

    /// Get a handle that cancels the driver between trials when set.
    pub fn cancellation_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel_flag)
    }
}
