use ahash::{HashMap, HashMapExt};

use super::{edge::WeightedEdge, Graph, Vertex, Weight};
use crate::error::{PathError, Result};

/// Adjacency map from each vertex to its neighbors and the weight of the
/// connecting edge. Suited for arbitrary vertex labels.
#[derive(Clone, Debug)]
pub struct HashGraph<V: Vertex, W> {
    out_edges: HashMap<V, HashMap<V, W>>,
}

impl<V: Vertex, W: Weight> Default for HashGraph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, W: Weight> Graph<V, W> for HashGraph<V, W> {
    fn vertices(&self) -> Box<dyn Iterator<Item = V> + '_> {
        Box::new(self.out_edges.keys().cloned())
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.out_edges.contains_key(vertex)
    }

    fn neighbors(&self, tail: &V) -> Result<Box<dyn ExactSizeIterator<Item = (&V, W)> + '_>, V> {
        let out_edges = self
            .out_edges
            .get(tail)
            .ok_or_else(|| PathError::UnknownVertex(tail.clone()))?;

        Ok(Box::new(
            out_edges.iter().map(|(head, weight)| (head, *weight)),
        ))
    }

    fn get_weight(&self, tail: &V, head: &V) -> Option<W> {
        self.out_edges.get(tail)?.get(head).copied()
    }

    fn number_of_vertices(&self) -> usize {
        self.out_edges.len()
    }

    fn number_of_edges(&self) -> usize {
        self.out_edges.values().map(HashMap::len).sum()
    }
}

impl<V: Vertex, W: Weight> HashGraph<V, W> {
    pub fn new() -> Self {
        HashGraph {
            out_edges: HashMap::new(),
        }
    }

    pub fn from_edges(edges: &[WeightedEdge<V, W>]) -> Self {
        let mut graph = HashGraph::new();
        edges.iter().for_each(|edge| graph.set_edge(edge));
        graph
    }

    /// Builds a graph from a nested adjacency map. Neighbors that are missing
    /// as keys are left out on purpose; the search reports them as unknown.
    pub fn from_adjacency(out_edges: HashMap<V, HashMap<V, W>>) -> Self {
        HashGraph { out_edges }
    }

    /// Registers `vertex` without any out edges. Existing edges are kept.
    pub fn add_vertex(&mut self, vertex: V) {
        self.out_edges.entry(vertex).or_default();
    }

    /// Inserts the edge, replacing the weight of an existing edge between
    /// the same ordered pair. Both endpoints become vertices of the graph.
    pub fn set_edge(&mut self, edge: &WeightedEdge<V, W>) {
        self.add_vertex(edge.head().clone());
        self.out_edges
            .entry(edge.tail().clone())
            .or_default()
            .insert(edge.head().clone(), edge.weight());
    }
}
