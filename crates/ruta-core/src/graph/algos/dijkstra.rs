use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::types::DistanceTable;
use crate::graph::Graph;

/// Frontier entry ordered by accumulated distance, for use behind
/// `Reverse` in a min-heap. Ties break on the vertex index so the order is
/// total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub vertex: usize,
    pub distance: u64,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Single-source shortest distances over non-negative edge weights.
///
/// Distances start at `Some(0)` for `start` and `None` (infinity)
/// elsewhere. Each improvement pushes a fresh frontier entry without
/// removing the superseded one; a stale entry is skipped on extraction
/// when its distance no longer matches the best known. The loop ends when
/// the frontier is empty, leaving unreachable vertices at `None`.
#[tracing::instrument(skip(graph))]
pub fn shortest_paths(graph: &Graph, start: usize) -> Result<DistanceTable> {
    graph.check_vertex(start)?;

    let mut distances: Vec<Option<u64>> = vec![None; graph.vertex_count()];
    distances[start] = Some(0);

    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        vertex: start,
        distance: 0,
    }));

    while let Some(Reverse(HeapEntry { vertex, distance })) = heap.pop() {
        // Lazy deletion: superseded by a later improvement.
        if distances[vertex].is_some_and(|best| distance > best) {
            continue;
        }

        for neighbor in graph.neighbors(vertex) {
            let candidate = distance + u64::from(neighbor.weight);
            let improved = match distances[neighbor.vertex] {
                Some(best) => candidate < best,
                None => true,
            };
            if improved {
                distances[neighbor.vertex] = Some(candidate);
                heap.push(Reverse(HeapEntry {
                    vertex: neighbor.vertex,
                    distance: candidate,
                }));
            }
        }
    }

    tracing::debug!(
        reachable = distances.iter().filter(|d| d.is_some()).count(),
        "dijkstra_shortest_paths"
    );

    Ok(DistanceTable { start, distances })
}
