//! Tour representation: a Hamiltonian cycle over the city indices.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SolverError};
use crate::problem::Vertex;
use crate::walk::AlternatingWalk;

/// A Hamiltonian cycle stored as two index arrays, `next` and `prev`.
///
/// The orientation is the one given by the vertex order the tour was built
/// from; `successor` and `predecessor` stay consistent with it for the
/// lifetime of the tour. Neighbor and edge-membership queries are O(1);
/// exchange feasibility checks are O(dimension) and reuse internal scratch
/// buffers across calls.
#[derive(Clone, Serialize, Deserialize)]
pub struct Tour {
    next: Vec<Vertex>,
    prev: Vec<Vertex>,
    #[serde(skip)]
    adjacency: Vec<Vec<Vertex>>,
    #[serde(skip)]
    visit_order: Vec<Vertex>,
    #[serde(skip)]
    visited: Vec<u64>,
    #[serde(skip)]
    visit_stamp: u64,
}

impl Tour {
    /// Create a tour from a vertex order. The closing edge from the last
    /// vertex back to the first is implied.
    ///
    /// Panics when `order` is not a permutation of `0..order.len()`.
    pub fn from_order(order: &[Vertex]) -> Self {
        let n = order.len();
        let mut next = vec![usize::MAX; n];
        let mut prev = vec![usize::MAX; n];

        for (position, &vertex) in order.iter().enumerate() {
            assert!(
                vertex < n && next[vertex] == usize::MAX,
                "tour order must be a permutation of 0..{}",
                n
            );
            let following = order[(position + 1) % n];
            next[vertex] = following;
            prev[following] = vertex;
        }

        Tour {
            next,
            prev,
            adjacency: Vec::new(),
            visit_order: Vec::new(),
            visited: Vec::new(),
            visit_stamp: 0,
        }
    }

    /// Get the number of cities on the tour.
    pub fn dimension(&self) -> usize {
        self.next.len()
    }

    /// Get the vertex that follows `v` in tour orientation.
    pub fn successor(&self, v: Vertex) -> Vertex {
        self.next[v]
    }

    /// Get the vertex that precedes `v` in tour orientation.
    pub fn predecessor(&self, v: Vertex) -> Vertex {
        self.prev[v]
    }

    /// Get the two vertices adjacent to `v` on the cycle, predecessor
    /// first.
    pub fn neighbors(&self, v: Vertex) -> [Vertex; 2] {
        [self.prev[v], self.next[v]]
    }

    /// Check whether `{u, v}` is an edge of the cycle.
    pub fn contains_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.next[u] == v || self.prev[u] == v
    }

    /// Return the vertex order of the tour, starting at vertex 0 and
    /// following successors.
    pub fn vertex_order(&self) -> Vec<Vertex> {
        let n = self.dimension();
        let mut order = Vec::with_capacity(n);
        let mut current = 0;

        for _ in 0..n {
            order.push(current);
            current = self.next[current];
        }

        order
    }

    /// Check whether applying the exchange described by a closed
    /// alternating walk yields another Hamiltonian cycle.
    ///
    /// The symmetric difference of the current edge set with the walk's
    /// alternating edges must be a single cycle through all vertices.
    pub fn is_tour_after_exchange(&mut self, closed_walk: &AlternatingWalk) -> bool {
        self.build_exchanged_adjacency(closed_walk) && self.trace_cycle()
    }

    /// Apply the exchange described by a closed alternating walk, mutating
    /// the tour.
    ///
    /// Reports `InvariantViolation` when the exchange does not produce a
    /// Hamiltonian cycle; callers are expected to have verified the walk
    /// with `is_tour_after_exchange` first.
    pub fn exchange(&mut self, closed_walk: &AlternatingWalk) -> Result<()> {
        if !self.build_exchanged_adjacency(closed_walk) || !self.trace_cycle() {
            return Err(SolverError::InvariantViolation(
                "edge exchange did not produce a Hamiltonian cycle".to_string(),
            ));
        }

        let n = self.dimension();
        for position in 0..n {
            let vertex = self.visit_order[position];
            let following = self.visit_order[(position + 1) % n];
            self.next[vertex] = following;
            self.prev[following] = vertex;
        }

        Ok(())
    }

    /// Overlay the walk's alternating edges on the cycle adjacency:
    /// even-indexed walk edges are removed, odd-indexed edges are added.
    /// Returns false when a removed edge is absent or some vertex does not
    /// end up with exactly two incident edges.
    fn build_exchanged_adjacency(&mut self, closed_walk: &AlternatingWalk) -> bool {
        let n = self.dimension();
        self.adjacency.resize(n, Vec::new());

        for v in 0..n {
            self.adjacency[v].clear();
            self.adjacency[v].push(self.prev[v]);
            self.adjacency[v].push(self.next[v]);
        }

        for (j, (u, v)) in closed_walk.edges().enumerate() {
            if j % 2 == 0 {
                if !detach_edge(&mut self.adjacency, u, v) {
                    return false;
                }
            } else {
                self.adjacency[u].push(v);
                self.adjacency[v].push(u);
            }
        }

        self.adjacency.iter().all(|edges| edges.len() == 2)
    }

    /// Follow the patched adjacency from vertex 0 and record the visit
    /// order. Returns true iff the traversal visits every vertex exactly
    /// once and closes back at 0.
    fn trace_cycle(&mut self) -> bool {
        let n = self.dimension();
        self.visited.resize(n, 0);
        self.visit_stamp += 1;
        self.visit_order.clear();

        let mut previous = usize::MAX;
        let mut current = 0;
        for _ in 0..n {
            if self.visited[current] == self.visit_stamp {
                return false;
            }
            self.visited[current] = self.visit_stamp;
            self.visit_order.push(current);

            let edges = &self.adjacency[current];
            let following = if edges[0] != previous { edges[0] } else { edges[1] };
            previous = current;
            current = following;
        }

        current == 0
    }
}

fn detach_edge(adjacency: &mut [Vec<Vertex>], u: Vertex, v: Vertex) -> bool {
    let Some(i) = adjacency[u].iter().position(|&w| w == v) else {
        return false;
    };
    adjacency[u].swap_remove(i);
    let Some(j) = adjacency[v].iter().position(|&w| w == u) else {
        return false;
    };
    adjacency[v].swap_remove(j);
    true
}

impl fmt::Debug for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tour({:?})", self.vertex_order())
    }
}
