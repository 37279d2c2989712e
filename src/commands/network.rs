//! Network loading for the ruta CLI
//!
//! Commands operate on either the built-in demo network (a 15-district
//! city road map) or a JSON description supplied via `--network`.

use std::fs;
use std::path::Path;

use ruta_core::error::Result;
use ruta_core::network::NetworkSpec;

/// Road segments of the demo city: (district, district, km).
const DEMO_EDGES: [(usize, usize, u32); 25] = [
    (0, 1, 45),
    (0, 2, 32),
    (1, 3, 21),
    (1, 4, 78),
    (2, 5, 44),
    (2, 6, 67),
    (3, 7, 15),
    (4, 7, 38),
    (4, 8, 59),
    (5, 9, 27),
    (5, 10, 33),
    (6, 10, 12),
    (7, 11, 48),
    (8, 11, 63),
    (8, 12, 29),
    (9, 13, 71),
    (10, 13, 54),
    (10, 14, 82),
    (11, 14, 36),
    (12, 13, 41),
    (12, 14, 65),
    (0, 13, 90),
    (1, 12, 83),
    (3, 14, 74),
    (6, 9, 53),
];

/// The built-in demo network: 15 districts, 25 road segments.
pub fn demo_network() -> NetworkSpec {
    NetworkSpec {
        vertices: 15,
        edges: DEMO_EDGES.to_vec(),
    }
}

/// Load the network for this invocation: the file named by `--network`,
/// or the built-in demo when none was given.
pub fn load(path: Option<&Path>) -> Result<NetworkSpec> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            NetworkSpec::from_json_str(&contents)
        }
        None => Ok(demo_network()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruta_core::graph::{find_one_path, minimum_spanning_tree, shortest_paths, traverse_all};

    #[test]
    fn test_demo_network_builds() {
        let graph = demo_network().to_graph().unwrap();
        assert_eq!(graph.vertex_count(), 15);
        assert_eq!(graph.edge_count(), 25);
    }

    /// Depth-first traversal of the demo city from district 0 covers the
    /// whole map along the first-inserted roads.
    #[test]
    fn test_demo_traversal_order_and_weight() {
        let graph = demo_network().to_graph().unwrap();
        let result = traverse_all(&graph, 0).unwrap();
        assert_eq!(
            result.order,
            vec![0, 1, 3, 7, 4, 8, 11, 14, 10, 5, 2, 6, 9, 13, 12]
        );
        assert_eq!(result.total_weight, 668);
    }

    /// Known shortest distances from district 0 in the demo city.
    #[test]
    fn test_demo_shortest_distances() {
        let graph = demo_network().to_graph().unwrap();
        let table = shortest_paths(&graph, 0).unwrap();
        assert_eq!(table.distance(0), Some(0));
        assert_eq!(table.distance(1), Some(45));
        assert_eq!(table.distance(2), Some(32));
        assert_eq!(table.distance(3), Some(66));
        assert_eq!(table.distance(5), Some(76));
        assert_eq!(table.distance(7), Some(81));
        assert_eq!(table.distance(13), Some(90));
        assert!((0..15).all(|v| table.is_reachable(v)));
    }

    /// The demo city is connected, so Kruskal selects exactly 14 roads.
    #[test]
    fn test_demo_spanning_tree() {
        let graph = demo_network().to_graph().unwrap();
        let tree = minimum_spanning_tree(&graph);
        assert_eq!(tree.edges.len(), 14);
        assert_eq!(tree.total_weight, 475);
        assert!(tree.is_spanning(15));
    }

    #[test]
    fn test_demo_path_exists_between_any_districts() {
        let graph = demo_network().to_graph().unwrap();
        let result = find_one_path(&graph, 3, 9).unwrap();
        assert!(result.found);
        assert_eq!(result.path.first(), Some(&3));
        assert_eq!(result.path.last(), Some(&9));
    }
}
