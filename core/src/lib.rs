//! graph-bench-core: graph representations and the algorithms benchmarked
//! over them.
//!
//! Two storage layouts, a dense adjacency matrix and sparse adjacency lists,
//! sit behind the object-safe [`Graph`] trait. Depth-first traversal,
//! Dijkstra and Bellman-Ford are written once against that trait and run
//! unchanged over either layout, which is what lets the bench binary compare
//! the layouts under identical algorithms.

mod error;
mod graph;
mod shortest_path;
mod traversal;

pub use error::GraphError;
pub use graph::{
    AdjacencyLists, AdjacencyMatrix, Edge, Graph, Neighbors, Representation, VertexId, Weight,
};
pub use shortest_path::{
    bellman_ford, build_path, dijkstra, Distance, ShortestPaths, UNREACHABLE,
};
pub use traversal::{dfs, reachable, visit_order};
