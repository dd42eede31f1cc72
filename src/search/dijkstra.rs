use tracing::debug;

use super::{
    collections::{dijkstra_data::DijkstraData, vertex_distance_queue::VertexDistanceQueue},
    path::Path,
};
use crate::{
    error::{PathError, Result},
    graphs::{Graph, Vertex, Weight},
};

/// Computes the distance and a predecessor on a shortest path from `start` to
/// every vertex of `graph`.
///
/// All edges are checked before the search begins: a negative (or NaN)
/// weight fails with `NegativeWeight`, an edge into a vertex that is not part
/// of the graph fails with `UnknownVertex`. The graph is never modified.
///
/// A path whose weight overflows the weight type is ignored, so a vertex only
/// reachable that way stays unreachable.
pub fn shortest_paths<V: Vertex, W: Weight, G: Graph<V, W> + ?Sized>(
    graph: &G,
    start: &V,
) -> Result<DijkstraData<V, W>, V> {
    let mut data = initialize(graph, start)?;
    let mut queue = VertexDistanceQueue::new();
    dijkstra(graph, &mut data, &mut queue, None)?;
    Ok(data)
}

/// Shortest path from `start` to `target`. The search stops as soon as
/// `target` is settled.
pub fn shortest_path<V: Vertex, W: Weight, G: Graph<V, W> + ?Sized>(
    graph: &G,
    start: &V,
    target: &V,
) -> Result<Path<V, W>, V> {
    if !graph.contains_vertex(target) {
        return Err(PathError::UnknownVertex(target.clone()));
    }

    let mut data = initialize(graph, start)?;
    let mut queue = VertexDistanceQueue::new();
    dijkstra(graph, &mut data, &mut queue, Some(target))?;
    data.get_path(target)
}

fn initialize<V: Vertex, W: Weight, G: Graph<V, W> + ?Sized>(
    graph: &G,
    start: &V,
) -> Result<DijkstraData<V, W>, V> {
    if !graph.contains_vertex(start) {
        return Err(PathError::UnknownVertex(start.clone()));
    }
    validate_edges(graph)?;

    Ok(DijkstraData::new(graph, start.clone()))
}

fn validate_edges<V: Vertex, W: Weight, G: Graph<V, W> + ?Sized>(graph: &G) -> Result<(), V> {
    for edge in graph.edges() {
        if !edge.is_non_negative() {
            return Err(PathError::NegativeWeight {
                tail: edge.tail().clone(),
                head: edge.head().clone(),
            });
        }
        if !graph.contains_vertex(edge.head()) {
            return Err(PathError::UnknownVertex(edge.head().clone()));
        }
    }

    Ok(())
}

fn dijkstra<V: Vertex, W: Weight, G: Graph<V, W> + ?Sized>(
    graph: &G,
    data: &mut DijkstraData<V, W>,
    queue: &mut VertexDistanceQueue<V, W>,
    target: Option<&V>,
) -> Result<(), V> {
    queue.insert(data.start().clone(), W::zero());

    let mut settled = 0usize;
    let mut stale = 0usize;
    let mut overflowed = 0usize;
    while let Some((tail, distance_tail)) = queue.pop() {
        // A shorter distance for `tail` was queued and settled earlier.
        if data
            .get_distance(&tail)
            .is_some_and(|best| distance_tail > best)
        {
            stale += 1;
            continue;
        }
        settled += 1;

        if target == Some(&tail) {
            break;
        }

        for (head, weight) in graph.neighbors(&tail)? {
            // Sums that overflow the weight type are never taken as distances.
            let Some(alternative_distance_head) = distance_tail.checked_sum(weight) else {
                overflowed += 1;
                continue;
            };
            let is_shorter = data
                .get_distance(head)
                .map_or(true, |current| alternative_distance_head < current);
            if is_shorter {
                data.set_distance(head.clone(), alternative_distance_head);
                data.set_predecessor(head.clone(), tail.clone());
                queue.insert(head.clone(), alternative_distance_head);
            }
        }
    }

    debug!(
        start = ?data.start(),
        vertices = graph.number_of_vertices(),
        settled,
        stale,
        overflowed,
        "dijkstra finished"
    );

    Ok(())
}
