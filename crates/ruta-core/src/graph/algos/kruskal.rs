use crate::graph::disjoint_set::DisjointSet;
use crate::graph::types::{MstEdge, MstResult};
use crate::graph::Graph;

/// Build a minimum spanning tree with Kruskal's algorithm.
///
/// Each undirected edge is considered once, in ascending weight order with
/// ties kept in collection order (stable sort). An edge is accepted when
/// its endpoints lie in different disjoint-set components. Disconnected
/// input yields a spanning forest; that is not reported here, and callers
/// interpret the selected edge count instead.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn minimum_spanning_tree(graph: &Graph) -> MstResult {
    let mut edges: Vec<MstEdge> = graph
        .undirected_edges()
        .into_iter()
        .map(|(source, destination, weight)| MstEdge {
            source,
            destination,
            weight,
        })
        .collect();
    edges.sort_by_key(|edge| edge.weight);

    let mut components = DisjointSet::new(graph.vertex_count());
    let mut selected = Vec::new();
    let mut total_weight = 0u64;

    for edge in edges {
        if components.union(edge.source, edge.destination) {
            total_weight += u64::from(edge.weight);
            selected.push(edge);
        }
    }

    tracing::debug!(selected = selected.len(), total_weight, "kruskal_mst");

    MstResult {
        edges: selected,
        total_weight,
    }
}
