/*!
# Errors

Every fallible operation of this crate returns [`GraphError`]. Failures are immediate and
non-recoverable at the point of the offending call: no operation retries or returns a partial
result. The one deliberate exception are point-to-point shortest path queries, which report
unreachability as `Ok(None)` since it is an expected outcome.
*/

use thiserror::Error;

use crate::{vertex::Vertex, Weight};

/// The error type shared by all graphs, builders and algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A [`Vertex`] that is not valid for the queried graph.
    #[error("vertex {0} does not belong to this graph")]
    VertexNotFound(Vertex),

    /// A raw position outside of its valid bound `0..len`.
    #[error("position {index} is out of range 0..{len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The weight of a link that is not present was requested.
    #[error("there is no link from {from} to {to}")]
    NoSuchLink { from: Vertex, to: Vertex },

    /// A negative weight was relaxed by an algorithm that requires non-negative weights.
    #[error("illegal weight {weight} on link from {from} to {to}")]
    IllegalWeight {
        from: Vertex,
        to: Vertex,
        weight: Weight,
    },

    /// A topological order was requested for a graph containing a cycle.
    #[error("the graph contains a cycle")]
    CycleDetected,

    /// A negative cycle reachable from the source was found while computing shortest paths.
    #[error("a negative cycle is reachable from {0}")]
    NegativeCycle(Vertex),

    /// Merging duplicate links overflowed the weight type.
    #[error("merging duplicate links from {from} to {to} overflows the weight")]
    WeightOverflow { from: Vertex, to: Vertex },

    /// Any other argument that is not acceptable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Returns `Ok(index)` if `index < len` and `IndexOutOfRange` otherwise
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(GraphError::IndexOutOfRange { index, len })
    }
}
