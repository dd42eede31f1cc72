use super::{edge::WeightedEdge, Graph, Weight};
use crate::error::{PathError, Result};

#[derive(Clone, Debug)]
struct TaillessEdge<W> {
    head: u32,
    weight: W,
}

/// Dense adjacency list over the vertices `0..number_of_vertices`. Edges
/// sharing a tail are kept sorted by head.
#[derive(Clone, Debug)]
pub struct VecGraph<W> {
    edges: Vec<Vec<TaillessEdge<W>>>,
}

impl<W: Weight> Default for VecGraph<W> {
    fn default() -> Self {
        VecGraph { edges: Vec::new() }
    }
}

impl<W: Weight> VecGraph<W> {
    /// Creates a graph with the isolated vertices `0..number_of_vertices`.
    pub fn with_vertices(number_of_vertices: u32) -> VecGraph<W> {
        VecGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    pub fn from_edges(edges: &[WeightedEdge<u32, W>]) -> VecGraph<W> {
        let mut graph = VecGraph::default();
        edges.iter().for_each(|edge| graph.set_edge(edge));
        graph
    }

    /// Inserts the edge or replaces the weight of an existing one. The vertex
    /// range grows to cover both endpoints.
    pub fn set_edge(&mut self, edge: &WeightedEdge<u32, W>) {
        let max_edge_endpoint = std::cmp::max(*edge.tail(), *edge.head()) as usize;
        if max_edge_endpoint >= self.edges.len() {
            self.edges.resize(max_edge_endpoint + 1, Vec::new());
        }

        let edges_sharing_tail = &mut self.edges[*edge.tail() as usize];
        match edges_sharing_tail.binary_search_by_key(edge.head(), |other| other.head) {
            Ok(index) => edges_sharing_tail[index].weight = edge.weight(),
            Err(index) => edges_sharing_tail.insert(
                index,
                TaillessEdge {
                    head: *edge.head(),
                    weight: edge.weight(),
                },
            ),
        }
    }
}

impl<W: Weight> Graph<u32, W> for VecGraph<W> {
    fn vertices(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        Box::new(0..self.edges.len() as u32)
    }

    fn contains_vertex(&self, vertex: &u32) -> bool {
        (*vertex as usize) < self.edges.len()
    }

    fn neighbors(
        &self,
        tail: &u32,
    ) -> Result<Box<dyn ExactSizeIterator<Item = (&u32, W)> + '_>, u32> {
        let edges_sharing_tail = self
            .edges
            .get(*tail as usize)
            .ok_or(PathError::UnknownVertex(*tail))?;

        Ok(Box::new(
            edges_sharing_tail
                .iter()
                .map(|edge| (&edge.head, edge.weight)),
        ))
    }

    fn get_weight(&self, tail: &u32, head: &u32) -> Option<W> {
        let edges_sharing_tail = self.edges.get(*tail as usize)?;
        let index = edges_sharing_tail
            .binary_search_by_key(head, |other| other.head)
            .ok()?;
        Some(edges_sharing_tail[index].weight)
    }

    fn number_of_vertices(&self) -> usize {
        self.edges.len()
    }

    fn number_of_edges(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }
}
