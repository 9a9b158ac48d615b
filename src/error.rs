//! Error types for graph and path-finder operations.

use thiserror::Error;

use crate::id::{EdgeId, ElementId, VertexId};

/// Errors returned by [`Graph`](crate::Graph) and
/// [`ShortestPathFinder`](crate::ShortestPathFinder) operations.
///
/// Erasing an unknown vertex or edge is not an error, and neither is asking
/// for a path to an unreachable vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex named by an insertion or query is not in the graph.
    #[error("unknown vertex {0}")]
    UnknownVertex(VertexId),

    /// [`EdgeRef::opposite`](crate::EdgeRef::opposite) was given a vertex
    /// that is neither end of the edge.
    #[error("vertex {vertex} is not an end of edge {edge}")]
    NotIncident { edge: EdgeId, vertex: VertexId },

    /// A handle or snapshot entry refers to a record that has been erased.
    #[error("stale reference to {0}")]
    StaleReference(ElementId),
}

pub type GraphResult<T> = Result<T, GraphError>;
