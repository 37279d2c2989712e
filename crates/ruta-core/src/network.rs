//! Caller-facing network description
//!
//! A network supplies a vertex count and a weighted edge list, either
//! built in code or deserialized from JSON:
//!
//! ```json
//! { "vertices": 3, "edges": [[0, 1, 5], [1, 2, 3], [0, 2, 10]] }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, RutaError};
use crate::graph::Graph;

/// Vertex count plus weighted undirected edge list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub vertices: usize,
    /// `(source, destination, weight)` triples, in insertion order.
    pub edges: Vec<(usize, usize, u32)>,
}

impl NetworkSpec {
    /// Parse a network description from JSON.
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|err| RutaError::InvalidNetwork {
            reason: err.to_string(),
        })
    }

    /// Build the graph this description denotes.
    ///
    /// Edge insertion order is preserved; it is observable through DFS
    /// neighbor ordering.
    pub fn to_graph(&self) -> Result<Graph> {
        let mut graph = Graph::new(self.vertices)?;
        for &(source, destination, weight) in &self.edges {
            graph.add_edge(source, destination, weight)?;
        }
        Ok(graph)
    }
}
