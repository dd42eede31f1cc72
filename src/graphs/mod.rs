use std::{fmt::Debug, hash::Hash};

use num_traits::Zero;

use crate::error::Result;

pub mod edge;
pub mod graph_functions;
pub mod hash_graph;
pub mod vec_graph;

use edge::WeightedEdge;

/// Identifier of a vertex. Any cloneable, hashable label qualifies, e.g.
/// `u32` indices or `String` names.
pub trait Vertex: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug + Send + Sync {}

/// Numeric edge weight. Signed and floating point types are allowed so that
/// invalid (negative) weights can be represented and rejected by the search.
pub trait Weight: Copy + PartialOrd + Zero + Debug + Send + Sync {
    /// Sum of two weights, `None` if it is not representable. Integer types
    /// fail on overflow, floating point types saturate at infinity.
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($integer:ty),*) => {
        $(
            impl Weight for $integer {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

macro_rules! float_weight {
    ($($float:ty),*) => {
        $(
            impl Weight for $float {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_weight!(f32, f64);

/// Read-only view of a directed, weighted graph.
///
/// The search expects every head of an edge to be listed in `vertices` as
/// well, including vertices without out edges.
pub trait Graph<V: Vertex, W: Weight>: Send + Sync {
    /// All vertices known to the graph, each exactly once.
    fn vertices(&self) -> Box<dyn Iterator<Item = V> + '_>;

    fn contains_vertex(&self, vertex: &V) -> bool;

    /// Outgoing `(head, weight)` pairs of `tail`.
    ///
    /// Fails with `UnknownVertex` if `tail` is not part of the graph.
    fn neighbors(&self, tail: &V) -> Result<Box<dyn ExactSizeIterator<Item = (&V, W)> + '_>, V>;

    fn get_weight(&self, tail: &V, head: &V) -> Option<W>;

    fn number_of_vertices(&self) -> usize;

    fn number_of_edges(&self) -> usize {
        self.vertices()
            .map(|vertex| self.neighbors(&vertex).map_or(0, |edges| edges.len()))
            .sum()
    }

    fn edges(&self) -> Vec<WeightedEdge<V, W>> {
        let mut edges = Vec::new();
        for tail in self.vertices() {
            if let Ok(neighbors) = self.neighbors(&tail) {
                edges.extend(neighbors.map(|(head, weight)| {
                    WeightedEdge::new(tail.clone(), head.clone(), weight)
                }));
            }
        }
        edges
    }
}
