//! Single source shortest paths on directed graphs with non-negative edge
//! weights, and reconstruction of the paths from the predecessor table.

pub mod error;
pub mod graphs;
pub mod search;
pub mod utility;

pub use error::PathError;
pub use graphs::{
    edge::WeightedEdge, hash_graph::HashGraph, vec_graph::VecGraph, Graph, Vertex, Weight,
};
pub use search::{
    collections::dijkstra_data::{DijkstraData, DistanceTable, PredecessorTable},
    dijkstra::{shortest_path, shortest_paths},
    path::{reconstruct_path, Path},
};
