use crate::error::Result;
use crate::graph::types::{PathResult, TraversalResult};
use crate::graph::Graph;

/// Working state for a single path search, freshly allocated per call.
struct PathState {
    visited: Vec<bool>,
    path: Vec<usize>,
}

/// Find one path from `start` to `end` by depth-first search.
///
/// Neighbors are explored in adjacency insertion order and the first
/// complete path wins; edge weights play no part. When every branch out of
/// a vertex dead-ends, the vertex is unmarked before backtracking so a
/// later branch of the same search may route through it; in cyclic graphs
/// this determines which path is returned. `start == end` yields the
/// singleton path immediately.
#[tracing::instrument(skip(graph))]
pub fn find_one_path(graph: &Graph, start: usize, end: usize) -> Result<PathResult> {
    graph.check_vertex(start)?;
    graph.check_vertex(end)?;

    let mut state = PathState {
        visited: vec![false; graph.vertex_count()],
        path: vec![start],
    };
    let found = search(graph, start, end, &mut state);
    tracing::debug!(found, path_len = state.path.len(), "dfs_find_one_path");

    Ok(PathResult {
        start,
        end,
        found,
        path: if found { state.path } else { Vec::new() },
    })
}

fn search(graph: &Graph, current: usize, end: usize, state: &mut PathState) -> bool {
    if current == end {
        return true;
    }

    state.visited[current] = true;
    for neighbor in graph.neighbors(current) {
        if !state.visited[neighbor.vertex] {
            state.path.push(neighbor.vertex);
            if search(graph, neighbor.vertex, end, state) {
                return true;
            }
            state.path.pop();
        }
    }

    // Every branch through this vertex dead-ended: free it for the other
    // branches still being explored.
    state.visited[current] = false;
    false
}

/// Working state for a full traversal, freshly allocated per call.
struct TraversalState {
    visited: Vec<bool>,
    order: Vec<usize>,
    total_weight: u64,
}

/// Visit every vertex reachable from `start`, depth-first.
///
/// Returns the visitation order and the summed weight of the tree edges:
/// the edges used to reach each newly discovered vertex, not every
/// incident edge. Visited markers are never unset here.
#[tracing::instrument(skip(graph))]
pub fn traverse_all(graph: &Graph, start: usize) -> Result<TraversalResult> {
    graph.check_vertex(start)?;

    let mut state = TraversalState {
        visited: vec![false; graph.vertex_count()],
        order: Vec::new(),
        total_weight: 0,
    };
    visit(graph, start, &mut state);
    tracing::debug!(
        visited = state.order.len(),
        total_weight = state.total_weight,
        "dfs_traverse_all"
    );

    Ok(TraversalResult {
        start,
        order: state.order,
        total_weight: state.total_weight,
    })
}

fn visit(graph: &Graph, current: usize, state: &mut TraversalState) {
    state.visited[current] = true;
    state.order.push(current);
    for neighbor in graph.neighbors(current) {
        if !state.visited[neighbor.vertex] {
            state.total_weight += u64::from(neighbor.weight);
            visit(graph, neighbor.vertex, state);
        }
    }
}
