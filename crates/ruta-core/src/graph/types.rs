//! Result types for graph algorithm output

use serde::Serialize;

/// Result of a single-path DFS search.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub start: usize,
    pub end: usize,
    pub found: bool,
    /// Vertices from `start` to `end` inclusive; empty when no path exists.
    pub path: Vec<usize>,
}

/// Result of a full DFS traversal from a start vertex.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalResult {
    pub start: usize,
    /// The start vertex's connected component, in visitation order.
    pub order: Vec<usize>,
    /// Sum of the weights of the edges used to reach newly visited
    /// vertices (tree edges only, not every incident edge).
    pub total_weight: u64,
}

/// Per-vertex shortest distances from a single source.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceTable {
    pub start: usize,
    /// Minimum total weight from `start`, indexed by vertex. `None` marks
    /// an unreachable vertex (serialized as JSON `null`).
    pub distances: Vec<Option<u64>>,
}

impl DistanceTable {
    /// Shortest distance from the source to `vertex`, if reachable.
    pub fn distance(&self, vertex: usize) -> Option<u64> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Whether `vertex` is reachable from the source.
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }
}

/// An edge selected into a minimum spanning tree, with
/// `source < destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MstEdge {
    pub source: usize,
    pub destination: usize,
    pub weight: u32,
}

/// Result of Kruskal's algorithm: the selected edges in acceptance order
/// (ascending weight) and their total weight.
///
/// A disconnected graph yields a spanning forest; the algorithm does not
/// report that, so callers interpret the edge count via the helpers here.
#[derive(Debug, Clone, Serialize)]
pub struct MstResult {
    pub edges: Vec<MstEdge>,
    pub total_weight: u64,
}

impl MstResult {
    /// Whether the selected edges form a single spanning tree of a graph
    /// with `vertex_count` vertices.
    pub fn is_spanning(&self, vertex_count: usize) -> bool {
        self.edges.len() + 1 == vertex_count
    }

    /// Number of connected components the selected forest spans.
    pub fn component_count(&self, vertex_count: usize) -> usize {
        vertex_count - self.edges.len()
    }
}
