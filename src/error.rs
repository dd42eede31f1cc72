use thiserror::Error;

/// Failures of the shortest path search and of path reconstruction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError<V> {
    #[error("vertex {0:?} is not part of the graph")]
    UnknownVertex(V),

    #[error("edge {tail:?} -> {head:?} has a negative weight")]
    NegativeWeight { tail: V, head: V },

    #[error("there is no path from {start:?} to {target:?}")]
    UnreachableTarget { start: V, target: V },

    /// The predecessor table was not produced by a search from `start`.
    #[error("predecessor table does not lead from {target:?} back to {start:?}")]
    CorruptPredecessorTable { start: V, target: V },
}

pub type Result<T, V> = std::result::Result<T, PathError<V>>;
