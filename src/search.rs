//! The Lin-Kernighan improvement search: a gain-directed alternating-walk
//! search with bounded backtracking.

use crate::candidates::CandidateEdges;
use crate::config::Config;
use crate::error::Result;
use crate::problem::{Problem, SignedDistance, Vertex};
use crate::tour::Tour;
use crate::walk::AlternatingWalk;

/// Improves a tour to a local optimum by repeatedly searching for an edge
/// exchange with positive gain.
///
/// The search grows an alternating walk vertex by vertex. At every odd
/// position it may add an edge from the candidate set, at every even
/// position it must remove a tour edge; whenever a closed walk with a new
/// highest gain passes the feasibility test it is remembered, and when a
/// branch is exhausted the best walk found so far is committed to the
/// tour. `vertex_choices[i]` enumerates the extensions still untried at
/// walk position i, so backtracking is a truncation of the stacks.
///
/// The walk and choice stacks live on the struct and are reused across
/// improvement rounds.
pub struct LkSearch {
    /// Maximum walk position the search may backtrack to after a failed
    /// extension.
    backtracking_depth: usize,
    /// Maximum even position up to which intermediate walks may be
    /// infeasible as exchanges; beyond it every extension is checked.
    infeasibility_depth: usize,
    vertex_choices: Vec<Vec<Vertex>>,
    current_walk: AlternatingWalk,
    best_walk: AlternatingWalk,
}

impl LkSearch {
    /// Create a new search with the depths from the configuration.
    pub fn new(config: &Config) -> Self {
        LkSearch {
            backtracking_depth: config.backtracking_depth,
            infeasibility_depth: config.infeasibility_depth,
            vertex_choices: Vec::new(),
            current_walk: AlternatingWalk::new(),
            best_walk: AlternatingWalk::new(),
        }
    }

    /// Improve a tour until no improving exchange can be found.
    ///
    /// `current_best` is the incumbent best tour of the trial driver, if
    /// any; the first edge broken in a round is then required to not lie
    /// on it, which steers trials away from rediscovering the incumbent.
    pub fn improve_tour(
        &mut self,
        problem: &Problem,
        candidate_edges: &CandidateEdges,
        current_best: Option<&Tour>,
        start_tour: Tour,
    ) -> Result<Tour> {
        let dimension = problem.dimension();
        let mut current_tour = start_tour;

        // One round per iteration: either it commits an improving exchange
        // and the next round starts on the shorter tour, or the search
        // space is exhausted and the tour is returned.
        'rounds: loop {
            self.vertex_choices.clear();
            self.vertex_choices.push((0..dimension).collect());
            self.current_walk.clear();
            self.best_walk.clear();
            let mut highest_gain: SignedDistance = 0;
            let mut i = 0;

            loop {
                let Some(xi) = self.vertex_choices[i].pop() else {
                    // Position i is exhausted: commit, give up, or backtrack.
                    if highest_gain > 0 {
                        current_tour.exchange(&self.best_walk)?;
                        continue 'rounds;
                    }
                    if i == 0 {
                        return Ok(current_tour);
                    }
                    i = (i - 1).min(self.backtracking_depth);
                    self.vertex_choices.truncate(i + 1);
                    self.current_walk.truncate(i);
                    continue;
                };
                self.current_walk.push(xi);

                if i % 2 == 1 && i >= 3 {
                    let closed_walk = self.current_walk.close();
                    let gain = problem.exchange_gain(&closed_walk);
                    if gain > highest_gain && current_tour.is_tour_after_exchange(&closed_walk) {
                        self.best_walk = closed_walk;
                        highest_gain = gain;
                    }
                }

                let mut next_choices: Vec<Vertex> = Vec::new();
                let x0 = self.current_walk[0];
                if i % 2 == 1 {
                    // The next edge is added: it must come from the
                    // candidate set, not lie on the tour or in the walk,
                    // and leave enough gain to still beat the best walk.
                    let open_gain = problem.exchange_gain(&self.current_walk);
                    let xi_predecessor = current_tour.predecessor(xi);
                    let xi_successor = current_tour.successor(xi);
                    for &x in &candidate_edges[xi] {
                        if x != x0
                            && x != xi_predecessor
                            && x != xi_successor
                            && !self.current_walk.contains_edge(xi, x)
                            && open_gain - problem.dist(xi, x) as SignedDistance > highest_gain
                        {
                            next_choices.push(x);
                        }
                    }
                } else if let (0, Some(best)) = (i, current_best) {
                    // The first edge to be broken may not lie on the
                    // current best tour.
                    let x0_predecessor = best.predecessor(x0);
                    let x0_successor = best.successor(x0);
                    for neighbor in current_tour.neighbors(xi) {
                        if neighbor != x0
                            && neighbor != x0_predecessor
                            && neighbor != x0_successor
                        {
                            next_choices.push(neighbor);
                        }
                    }
                } else if i <= self.infeasibility_depth {
                    // Shallow removals are not checked for feasibility.
                    // No removal may lead back to x0: the walk has an even
                    // number of vertices here and could never be closed.
                    for neighbor in current_tour.neighbors(xi) {
                        if neighbor != x0 && !self.current_walk.contains_edge(xi, neighbor) {
                            next_choices.push(neighbor);
                        }
                    }
                } else {
                    // Beyond the infeasibility depth only removals whose
                    // one-step closure yields a valid tour are kept. The
                    // closing edge (neighbor, x0) can only collide with a
                    // walk edge when neighbor is x1.
                    let x1 = self.current_walk[1];
                    for neighbor in current_tour.neighbors(xi) {
                        if neighbor != x0
                            && !self.current_walk.contains_edge(xi, neighbor)
                            && neighbor != x1
                            && current_tour
                                .is_tour_after_exchange(&self.current_walk.append_and_close(neighbor))
                        {
                            next_choices.push(neighbor);
                        }
                    }
                }
                self.vertex_choices.push(next_choices);

                i += 1;
            }
        }
    }
}
