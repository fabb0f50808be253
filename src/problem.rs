//! Problem definition and data structures for the symmetric TSP.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use crate::error::{Result, SolverError};
use crate::tour::Tour;
use crate::walk::AlternatingWalk;

/// A city identifier in `[0, dimension)`.
pub type Vertex = usize;

/// A nonnegative edge length.
pub type Distance = u64;

/// A signed edge length, wide enough to hold sums and differences of
/// distances along an alternating walk.
pub type SignedDistance = i64;

/// Represents a city in the TSP instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

impl Node {
    /// Create a new node.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Node { id, x, y }
    }

    /// Calculate the Euclidean distance between two nodes.
    pub fn distance(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Represents a symmetric TSP instance.
///
/// Distances are precomputed into a full matrix so that `dist` is a plain
/// lookup on the hot path. Geometric instances round Euclidean distances
/// to the nearest integer; non-geometric instances can be built directly
/// from a matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub nodes: Vec<Node>,
    pub distance_matrix: Vec<Vec<Distance>>,
}

impl Problem {
    /// Create a new problem from city coordinates.
    pub fn new(name: String, nodes: Vec<Node>) -> Self {
        let distance_matrix = Self::compute_distance_matrix(&nodes);

        Problem {
            name,
            nodes,
            distance_matrix,
        }
    }

    /// Create a problem directly from a distance matrix.
    ///
    /// The matrix must be square and symmetric with a zero diagonal.
    pub fn from_matrix(name: String, distance_matrix: Vec<Vec<Distance>>) -> Result<Self> {
        let n = distance_matrix.len();

        for (i, row) in distance_matrix.iter().enumerate() {
            if row.len() != n {
                return Err(SolverError::InvalidArgument(format!(
                    "distance matrix row {} has length {}, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            if row[i] != 0 {
                return Err(SolverError::InvalidArgument(format!(
                    "distance matrix has nonzero diagonal at {}",
                    i
                )));
            }
        }
        for i in 0..n {
            for j in 0..i {
                if distance_matrix[i][j] != distance_matrix[j][i] {
                    return Err(SolverError::InvalidArgument(format!(
                        "distance matrix is not symmetric at ({}, {})",
                        i, j
                    )));
                }
            }
        }

        Ok(Problem {
            name,
            nodes: Vec::new(),
            distance_matrix,
        })
    }

    /// Get the number of cities.
    pub fn dimension(&self) -> usize {
        self.distance_matrix.len()
    }

    /// Calculate the distance between two city indices.
    pub fn dist(&self, from: Vertex, to: Vertex) -> Distance {
        self.distance_matrix[from][to]
    }

    /// Calculate the total length of a tour.
    pub fn length(&self, tour: &Tour) -> Distance {
        (0..tour.dimension())
            .map(|v| self.dist(v, tour.successor(v)))
            .sum()
    }

    /// Calculate the gain of the edge exchange described by an alternating
    /// walk: the sum of the removed edge lengths (even walk edges) minus
    /// the sum of the added edge lengths (odd walk edges).
    ///
    /// For an open walk this is an upper bound on the gain still achievable
    /// by any closure of the walk.
    pub fn exchange_gain(&self, walk: &AlternatingWalk) -> SignedDistance {
        let mut gain: SignedDistance = 0;

        for (j, (u, v)) in walk.edges().enumerate() {
            let d = self.dist(u, v) as SignedDistance;
            if j % 2 == 0 {
                gain += d;
            } else {
                gain -= d;
            }
        }

        gain
    }

    /// Generate the full distance matrix for all nodes, rounding each
    /// Euclidean distance to the nearest integer.
    fn compute_distance_matrix(nodes: &[Node]) -> Vec<Vec<Distance>> {
        let n = nodes.len();
        let mut matrix = vec![vec![0; n]; n];

        for i in 0..n {
            for j in 0..n {
                if i != j {
                    matrix[i][j] = (nodes[i].distance(&nodes[j]) + 0.5) as Distance;
                }
            }
        }

        matrix
    }

    /// Load a problem from a file.
    ///
    /// The format is a name line followed by one `id x y` line per city.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = io::BufReader::new(file);
        let mut lines = reader.lines();

        let name = match lines.next() {
            Some(line) => line?.trim().to_string(),
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "missing name line",
                ))
            }
        };

        let mut nodes = Vec::new();
        for (i, line_result) in lines.enumerate() {
            let line = line_result?;
            let parts: Vec<&str> = line.split_whitespace().collect();

            if parts.len() >= 3 {
                let x = parts[1].parse::<f64>().map_err(|e| {
                    io::Error::new(io::ErrorKind::InvalidData, format!("line {}: {}", i + 2, e))
                })?;
                let y = parts[2].parse::<f64>().map_err(|e| {
                    io::Error::new(io::ErrorKind::InvalidData, format!("line {}: {}", i + 2, e))
                })?;
                nodes.push(Node::new(nodes.len(), x, y));
            }
        }

        Ok(Problem::new(name, nodes))
    }
}
