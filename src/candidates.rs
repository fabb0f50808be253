//! Candidate edge sets used to prune the search.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::alpha::{alpha_distances, optimized_alpha_distances};
use crate::error::{Result, SolverError};
use crate::problem::{Problem, SignedDistance, Vertex};

/// The strategy used to build the candidate edge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateEdgeType {
    /// Every other vertex is a candidate. Only practical for small
    /// instances, where it makes the search exhaustive.
    AllNeighbors,
    /// The k nearest other vertices by distance.
    NearestNeighbors,
    /// The k other vertices with the smallest `(alpha, distance)` key,
    /// where alpha measures how much the minimum 1-tree grows when the
    /// edge is forced into it.
    AlphaNearestNeighbors,
    /// As `AlphaNearestNeighbors`, with alpha computed on a
    /// subgradient-optimized 1-tree.
    OptimizedAlphaNearestNeighbors,
}

/// Per-vertex neighbor lists restricting which edges the search may add.
///
/// Built once per problem and immutable afterwards. A vertex never appears
/// in its own list; all lists have the same length (k, or the full
/// dimension minus one for `AllNeighbors`). Ties in the sort key are
/// broken by vertex id so that construction is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEdges {
    lists: Vec<Vec<Vertex>>,
}

impl CandidateEdges {
    /// Build the candidate edge set for a problem.
    ///
    /// `k` is ignored by `AllNeighbors`; the other strategies require
    /// `k < dimension`.
    pub fn create(problem: &Problem, edge_type: CandidateEdgeType, k: usize) -> Result<Self> {
        let n = problem.dimension();

        if n == 0 {
            return Err(SolverError::InvalidArgument(
                "problem dimension is 0".to_string(),
            ));
        }
        if edge_type != CandidateEdgeType::AllNeighbors && k >= n {
            return Err(SolverError::InvalidArgument(format!(
                "k = {} must be smaller than the dimension {}",
                k, n
            )));
        }

        let edges = match edge_type {
            CandidateEdgeType::AllNeighbors => Self::all_neighbors(n),
            CandidateEdgeType::NearestNeighbors => Self::nearest_neighbors(problem, k),
            CandidateEdgeType::AlphaNearestNeighbors => {
                let alpha = alpha_distances(n, |u, v| problem.dist(u, v));
                Self::alpha_nearest_neighbors(problem, &alpha, k)
            }
            CandidateEdgeType::OptimizedAlphaNearestNeighbors => {
                let alpha = optimized_alpha_distances(n, |u, v| problem.dist(u, v));
                Self::alpha_nearest_neighbors(problem, &alpha, k)
            }
        };

        Ok(edges)
    }

    /// Get the number of vertices the set was built for.
    pub fn dimension(&self) -> usize {
        self.lists.len()
    }

    fn all_neighbors(n: usize) -> Self {
        let lists = (0..n)
            .map(|v| (0..n).filter(|&w| w != v).collect())
            .collect();

        CandidateEdges { lists }
    }

    fn nearest_neighbors(problem: &Problem, k: usize) -> Self {
        Self::sorted_neighbors(problem.dimension(), k, |v, w| (problem.dist(v, w), w))
    }

    fn alpha_nearest_neighbors(problem: &Problem, alpha: &[Vec<SignedDistance>], k: usize) -> Self {
        Self::sorted_neighbors(problem.dimension(), k, |v, w| {
            (alpha[v][w], problem.dist(v, w), w)
        })
    }

    /// Sort every vertex's potential neighbors by the given key and keep
    /// the k smallest.
    fn sorted_neighbors<K, F>(n: usize, k: usize, key: F) -> Self
    where
        K: Ord,
        F: Fn(Vertex, Vertex) -> K,
    {
        let lists = (0..n)
            .map(|v| {
                let mut others: Vec<Vertex> = (0..n).filter(|&w| w != v).collect();
                others.sort_by_key(|&w| key(v, w));
                others.truncate(k);
                others
            })
            .collect();

        CandidateEdges { lists }
    }
}

impl Index<Vertex> for CandidateEdges {
    type Output = [Vertex];

    fn index(&self, vertex: Vertex) -> &[Vertex] {
        &self.lists[vertex]
    }
}
