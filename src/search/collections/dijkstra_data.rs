use ahash::{HashMap, HashMapExt};
use serde::Serialize;

use crate::{
    error::{PathError, Result},
    graphs::{Graph, Vertex, Weight},
    search::path::{reconstruct_path, Path},
};

/// Distance of every vertex from the start, `None` if it is unreachable.
pub type DistanceTable<V, W> = HashMap<V, Option<W>>;

/// Vertex preceding every vertex on a shortest path from the start. `None`
/// for the start itself and for unreachable vertices.
pub type PredecessorTable<V> = HashMap<V, Option<V>>;

/// Result of a single source search.
#[derive(Clone, Debug, Serialize)]
pub struct DijkstraData<V: Vertex, W> {
    start: V,
    pub distances: DistanceTable<V, W>,
    pub predecessors: PredecessorTable<V>,
}

impl<V: Vertex, W: Weight> DijkstraData<V, W> {
    /// Every vertex of `graph` starts unreachable, except `start` at distance
    /// zero.
    pub fn new<G: Graph<V, W> + ?Sized>(graph: &G, start: V) -> Self {
        let mut distances = HashMap::with_capacity(graph.number_of_vertices());
        let mut predecessors = HashMap::with_capacity(graph.number_of_vertices());
        for vertex in graph.vertices() {
            distances.insert(vertex.clone(), None);
            predecessors.insert(vertex, None);
        }
        distances.insert(start.clone(), Some(W::zero()));

        DijkstraData {
            start,
            distances,
            predecessors,
        }
    }

    pub fn start(&self) -> &V {
        &self.start
    }

    pub fn get_distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn set_distance(&mut self, vertex: V, distance: W) {
        self.distances.insert(vertex, Some(distance));
    }

    pub fn get_predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex)?.as_ref()
    }

    pub fn set_predecessor(&mut self, vertex: V, predecessor: V) {
        self.predecessors.insert(vertex, Some(predecessor));
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.get_distance(vertex).is_some()
    }

    /// Traces the shortest path to `target` back through the predecessors.
    pub fn get_path(&self, target: &V) -> Result<Path<V, W>, V> {
        let vertices = reconstruct_path(&self.predecessors, &self.start, target)?;
        let weight = self
            .get_distance(target)
            .ok_or_else(|| PathError::CorruptPredecessorTable {
                start: self.start.clone(),
                target: target.clone(),
            })?;

        Ok(Path { vertices, weight })
    }

    pub fn into_tables(self) -> (DistanceTable<V, W>, PredecessorTable<V>) {
        (self.distances, self.predecessors)
    }
}
