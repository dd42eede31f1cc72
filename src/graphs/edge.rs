use super::{Vertex, Weight};

#[derive(Clone, PartialEq, Debug)]
pub struct WeightedEdge<V, W> {
    tail: V,
    head: V,
    weight: W,
}

impl<V: Vertex, W: Weight> WeightedEdge<V, W> {
    pub fn new(tail: V, head: V, weight: W) -> WeightedEdge<V, W> {
        WeightedEdge { tail, head, weight }
    }

    pub fn tail(&self) -> &V {
        &self.tail
    }

    pub fn head(&self) -> &V {
        &self.head
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    pub fn reversed(&self) -> WeightedEdge<V, W> {
        WeightedEdge {
            tail: self.head.clone(),
            head: self.tail.clone(),
            weight: self.weight,
        }
    }

    pub fn is_non_negative(&self) -> bool {
        // NaN compares false and is rejected alongside negative values.
        self.weight >= W::zero()
    }
}

impl<V: Vertex, W: Weight> From<(V, V, W)> for WeightedEdge<V, W> {
    fn from((tail, head, weight): (V, V, W)) -> Self {
        WeightedEdge::new(tail, head, weight)
    }
}
