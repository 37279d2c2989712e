//! Weighted undirected graph representation and algorithms
//!
//! Provides the shared adjacency-list graph and the operations over it:
//! - DFS path finding and full traversal
//! - Dijkstra single-source shortest distances
//! - Kruskal minimum spanning tree over a disjoint-set

pub mod algos;
pub mod disjoint_set;
pub mod types;

use serde::Serialize;

use crate::error::{Result, RutaError};

pub use algos::{find_one_path, minimum_spanning_tree, shortest_paths, traverse_all};
pub use disjoint_set::DisjointSet;
pub use types::{DistanceTable, MstEdge, MstResult, PathResult, TraversalResult};

/// A single adjacency entry: the neighboring vertex and the weight of the
/// connecting edge in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbor {
    pub vertex: usize,
    pub weight: u32,
}

/// Weighted undirected graph over integer vertices `0..vertex_count`.
///
/// Adjacency lists keep insertion order; that order is observable through
/// DFS neighbor tie-breaking. The graph is populated by edge insertion and
/// read-only while algorithms run.
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<Vec<Neighbor>>,
}

impl Graph {
    /// Create a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(RutaError::InvalidVertexCount(vertex_count));
        }
        Ok(Self {
            vertex_count,
            adjacency: vec![Vec::new(); vertex_count],
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of undirected edges inserted so far.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Validate that `vertex` is a legal index for this graph.
    pub fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex >= self.vertex_count {
            return Err(RutaError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }

    /// Insert an undirected edge between `source` and `destination`.
    ///
    /// Appends to both adjacency lists, so traversal is valid in either
    /// direction with the same weight. Duplicate edges are not rejected.
    pub fn add_edge(&mut self, source: usize, destination: usize, weight: u32) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;
        self.adjacency[source].push(Neighbor {
            vertex: destination,
            weight,
        });
        self.adjacency[destination].push(Neighbor {
            vertex: source,
            weight,
        });
        Ok(())
    }

    /// Adjacency list of `vertex`, in insertion order.
    pub fn neighbors(&self, vertex: usize) -> &[Neighbor] {
        &self.adjacency[vertex]
    }

    /// Collect every undirected edge exactly once as
    /// `(source, destination, weight)` with `source < destination`, in
    /// adjacency scan order. Skips the mirror entry created by undirected
    /// insertion.
    pub fn undirected_edges(&self) -> Vec<(usize, usize, u32)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for source in 0..self.vertex_count {
            for neighbor in &self.adjacency[source] {
                if source < neighbor.vertex {
                    edges.push((source, neighbor.vertex, neighbor.weight));
                }
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_vertices() {
        let err = Graph::new(0).unwrap_err();
        assert!(matches!(err, RutaError::InvalidVertexCount(0)));
    }

    #[test]
    fn test_add_edge_both_directions() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_edge(0, 1, 5).unwrap();

        assert_eq!(graph.neighbors(0), &[Neighbor { vertex: 1, weight: 5 }]);
        assert_eq!(graph.neighbors(1), &[Neighbor { vertex: 0, weight: 5 }]);
        assert!(graph.neighbors(2).is_empty());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_out_of_range() {
        let mut graph = Graph::new(2).unwrap();
        let err = graph.add_edge(0, 2, 1).unwrap_err();
        assert!(matches!(
            err,
            RutaError::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            }
        ));
        // Failed insertion must not leave a dangling half-edge.
        assert!(graph.neighbors(0).is_empty());
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let mut graph = Graph::new(4).unwrap();
        graph.add_edge(0, 2, 7).unwrap();
        graph.add_edge(0, 1, 3).unwrap();
        graph.add_edge(0, 3, 9).unwrap();

        let order: Vec<usize> = graph.neighbors(0).iter().map(|n| n.vertex).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }

    #[test]
    fn test_undirected_edges_collects_each_edge_once() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_edge(0, 1, 5).unwrap();
        graph.add_edge(2, 1, 3).unwrap();
        graph.add_edge(0, 2, 10).unwrap();

        assert_eq!(
            graph.undirected_edges(),
            vec![(0, 1, 5), (0, 2, 10), (1, 2, 3)]
        );
    }
}
