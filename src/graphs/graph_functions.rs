use itertools::Itertools;

use super::{edge::WeightedEdge, hash_graph::HashGraph, Graph, Vertex, Weight};
use crate::search::path::Path;

/// Sums the edge weights along `vertices`. Returns `None` if the sequence is
/// empty, starts outside the graph, uses a pair that is not an edge or its
/// weight overflows.
pub fn path_weight<V: Vertex, W: Weight, G: Graph<V, W> + ?Sized>(
    graph: &G,
    vertices: &[V],
) -> Option<W> {
    if !graph.contains_vertex(vertices.first()?) {
        return None;
    }

    vertices
        .iter()
        .tuple_windows()
        .try_fold(W::zero(), |weight, (tail, head)| {
            weight.checked_sum(graph.get_weight(tail, head)?)
        })
}

/// Check if a path from `start` is a valid shortest path with the expected
/// distance.
pub fn validate_path<V: Vertex, W: Weight, G: Graph<V, W> + ?Sized>(
    graph: &G,
    start: &V,
    distance: W,
    path: &Path<V, W>,
) -> Result<(), String> {
    if path.vertices.first() != Some(start) {
        return Err(format!("path does not start at {:?}", start));
    }

    let Some(true_weight) = path_weight(graph, &path.vertices) else {
        return Err("path uses a pair of vertices that is not an edge".to_string());
    };

    if true_weight != path.weight {
        return Err(format!(
            "path claims weight {:?} but its edges sum to {:?}",
            path.weight, true_weight
        ));
    }

    if path.weight != distance {
        return Err(format!(
            "path weight {:?} differs from distance {:?}",
            path.weight, distance
        ));
    }

    Ok(())
}

pub fn add_edge_bidirectional<V: Vertex, W: Weight>(
    graph: &mut HashGraph<V, W>,
    edge: &WeightedEdge<V, W>,
) {
    graph.set_edge(edge);
    graph.set_edge(&edge.reversed());
}
