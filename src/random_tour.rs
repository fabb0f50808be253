//! Randomized start-tour generation biased by candidate edges and the
//! incumbent best tour.

use rand::Rng;

use crate::candidates::CandidateEdges;
use crate::problem::{Problem, Vertex};
use crate::tour::Tour;

/// Produces start tours for the trial driver.
///
/// The walk through the vertices prefers, in order: candidate edges that
/// also lie on the current best tour (intensification around the
/// incumbent), then any candidate edge (staying in the candidate graph),
/// then any unvisited vertex (guaranteeing a Hamiltonian cycle even when
/// the candidate graph is disconnected over the remaining vertices). The
/// pick within the winning class is uniform.
pub struct RandomTourGenerator;

impl RandomTourGenerator {
    /// Generate a start tour.
    pub fn generate<R: Rng>(
        problem: &Problem,
        candidate_edges: &CandidateEdges,
        current_best: Option<&Tour>,
        rng: &mut R,
    ) -> Tour {
        let n = problem.dimension();
        let mut remaining: Vec<Vertex> = (0..n).collect();
        let mut unvisited = vec![true; n];
        let mut tour_order = Vec::with_capacity(n);

        let mut current = choose_uniform(&remaining, rng);
        remaining.retain(|&v| v != current);
        unvisited[current] = false;
        tour_order.push(current);

        let mut best_tour_candidates: Vec<Vertex> = Vec::new();
        let mut open_candidates: Vec<Vertex> = Vec::new();

        while !remaining.is_empty() {
            best_tour_candidates.clear();
            open_candidates.clear();

            for &other in &candidate_edges[current] {
                if unvisited[other] {
                    if let Some(best) = current_best {
                        if best.contains_edge(current, other) {
                            best_tour_candidates.push(other);
                        }
                    }
                    open_candidates.push(other);
                }
            }

            current = if !best_tour_candidates.is_empty() {
                choose_uniform(&best_tour_candidates, rng)
            } else if !open_candidates.is_empty() {
                choose_uniform(&open_candidates, rng)
            } else {
                choose_uniform(&remaining, rng)
            };
            remaining.retain(|&v| v != current);
            unvisited[current] = false;
            tour_order.push(current);
        }

        Tour::from_order(&tour_order)
    }
}

fn choose_uniform<R: Rng>(elements: &[Vertex], rng: &mut R) -> Vertex {
    elements[rng.gen_range(0..elements.len())]
}
