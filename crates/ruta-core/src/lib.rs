//! Ruta Core Library
//!
//! Graph representation and algorithms for road-network analysis:
//! depth-first path finding and traversal, Dijkstra shortest distances,
//! and Kruskal minimum spanning trees over weighted undirected graphs.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod network;
