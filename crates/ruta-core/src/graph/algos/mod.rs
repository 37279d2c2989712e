//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dfs`: depth-first path finding and full traversal
//! - `dijkstra`: single-source shortest distances
//! - `kruskal`: minimum spanning tree construction

pub mod dfs;
pub mod dijkstra;
pub mod kruskal;

pub use dfs::{find_one_path, traverse_all};
pub use dijkstra::shortest_paths;
pub use kruskal::minimum_spanning_tree;
