use serde::Serialize;

use super::collections::dijkstra_data::PredecessorTable;
use crate::{
    error::{PathError, Result},
    graphs::Vertex,
};

/// Represents a path in a graph.
///
/// This struct encapsulates the vertices that form a path, from the start to
/// the target inclusive, and the total weight of traversing it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Path<V, W> {
    pub vertices: Vec<V>,
    pub weight: W,
}

/// Walks the predecessor table backwards from `target` until `start` is
/// reached and returns the vertices in path order.
///
/// The walk is bounded by the size of the table, so a cyclic table fails
/// with `CorruptPredecessorTable` instead of looping.
pub fn reconstruct_path<V: Vertex>(
    predecessors: &PredecessorTable<V>,
    start: &V,
    target: &V,
) -> Result<Vec<V>, V> {
    if target == start {
        return Ok(vec![start.clone()]);
    }

    let corrupt = || PathError::CorruptPredecessorTable {
        start: start.clone(),
        target: target.clone(),
    };

    let mut current = predecessors
        .get(target)
        .ok_or_else(|| PathError::UnknownVertex(target.clone()))?
        .as_ref()
        .ok_or_else(|| PathError::UnreachableTarget {
            start: start.clone(),
            target: target.clone(),
        })?;

    let mut vertices = vec![target.clone()];
    while current != start {
        if vertices.len() > predecessors.len() {
            return Err(corrupt());
        }
        vertices.push(current.clone());
        current = predecessors
            .get(current)
            .ok_or_else(corrupt)?
            .as_ref()
            .ok_or_else(corrupt)?;
    }
    vertices.push(start.clone());

    vertices.reverse();
    Ok(vertices)
}
