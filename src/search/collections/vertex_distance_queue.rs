use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graphs::{Vertex, Weight};

struct QueueElement<V, W> {
    distance: W,
    vertex: V,
}

// `BinaryHeap` is a max-heap, so the ordering on distances is flipped.
// Weights are only `PartialOrd`; the search rejects NaN before anything is
// queued, which makes the fallback to `Equal` unreachable in practice.
impl<V, W: Weight> Ord for QueueElement<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
    }
}

impl<V, W: Weight> PartialOrd for QueueElement<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, W: Weight> PartialEq for QueueElement<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, W: Weight> Eq for QueueElement<V, W> {}

/// Frontier of Dijkstra's algorithm backed by a binary heap.
///
/// There is no decrease key operation. A vertex is inserted again whenever
/// its distance improves and the outdated entries are skipped by the caller
/// when they are popped.
pub struct VertexDistanceQueue<V, W> {
    heap: BinaryHeap<QueueElement<V, W>>,
}

impl<V: Vertex, W: Weight> Default for VertexDistanceQueue<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, W: Weight> VertexDistanceQueue<V, W> {
    pub fn new() -> Self {
        VertexDistanceQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn insert(&mut self, vertex: V, distance: W) {
        self.heap.push(QueueElement { distance, vertex });
    }

    /// Removes the entry with the smallest distance.
    pub fn pop(&mut self) -> Option<(V, W)> {
        let QueueElement { distance, vertex } = self.heap.pop()?;
        Some((vertex, distance))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
