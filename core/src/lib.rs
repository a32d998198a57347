//! influence-core: In-memory social graph traversal engine.
//!
//! A pure Rust library that loads undirected adjacency lists from CSV,
//! computes single-source shortest-path distances (BFS for unit weights,
//! Dijkstra for weighted edges) and reduces them to an influence score.
//!
//! Designed as the engine behind the `influence` command-line tool, but
//! usable independently for benchmarking and testing.

mod error;
mod graph;
pub mod load;
pub mod observer;
mod score;
mod traversal;


pub use error::{LoadError, ScoreError, TraversalError};
pub use graph::{Edge, EdgeWeight, Graph, NodeId, UnweightedGraph, WeightedGraph};
pub use load::{load_unweighted, load_weighted, read_unweighted, read_weighted};
pub use observer::{TraversalEvent, TraversalObserver, TracingObserver};
pub use score::{influence_score, round_score};
pub use traversal::{
    bfs_distances, bfs_observed, dijkstra_distances, dijkstra_observed, DistanceMap,
};
