//! Alternating walk representation for edge exchanges.

use std::ops::Index;

use crate::problem::Vertex;

/// An ordered sequence of vertices describing an edge exchange.
///
/// Consecutive pairs alternate between edges to remove from the tour and
/// edges to add: the first edge `(x0, x1)` is removed, `(x1, x2)` is added,
/// `(x2, x3)` is removed, and so on. A closed walk repeats its first vertex
/// at the end. The search maintains the invariant that no edge (as an
/// unordered pair) occurs twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlternatingWalk {
    vertices: Vec<Vertex>,
}

impl AlternatingWalk {
    /// Create a new, empty walk.
    pub fn new() -> Self {
        AlternatingWalk {
            vertices: Vec::new(),
        }
    }

    /// Get the number of vertices in the walk.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check whether the walk has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Remove all vertices from the walk.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Append a vertex to the walk.
    pub fn push(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    /// Shorten the walk to `len` vertices.
    pub fn truncate(&mut self, len: usize) {
        self.vertices.truncate(len);
    }

    /// Return a copy of the walk with the first vertex appended, turning
    /// it into a closed walk.
    ///
    /// Panics when the walk is empty.
    pub fn close(&self) -> Self {
        let mut result = self.clone();
        result.vertices.push(self.vertices[0]);
        result
    }

    /// Return a copy of the walk with `vertex` and then the first vertex
    /// appended, closing the walk one step further.
    ///
    /// Panics when the walk is empty.
    pub fn append_and_close(&self, vertex: Vertex) -> Self {
        let mut result = self.clone();
        result.vertices.push(vertex);
        result.vertices.push(self.vertices[0]);
        result
    }

    /// Check whether some consecutive pair in the walk equals `{u, v}` as
    /// an unordered pair.
    pub fn contains_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.edges().any(|(a, b)| (a == u && b == v) || (a == v && b == u))
    }

    /// Iterate over the consecutive-pair edges of the walk in order.
    /// Even-indexed edges are removed from the tour, odd-indexed edges are
    /// added.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl Index<usize> for AlternatingWalk {
    type Output = Vertex;

    fn index(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }
}

impl From<Vec<Vertex>> for AlternatingWalk {
    fn from(vertices: Vec<Vertex>) -> Self {
        AlternatingWalk { vertices }
    }
}
