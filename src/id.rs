//! Vertex and edge identities.
//!
//! Identities are plain integers tagged with the [`GraphId`] of the graph that
//! issued them.  Vertex and edge identities come from independent counters
//! that start at 1 and only ever move forward, so an identity is never reused
//! after the record it named has been erased.

use std::fmt::{self, Debug, Display};

use crate::graph_id::GraphId;

/// Identity of a vertex within the graph that created it.
///
/// Two `VertexId`s are equal exactly when they were issued by the same graph
/// for the same insertion.  Handles order by insertion.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    index: u64,
    graph_id: GraphId,
}

/// Identity of an edge within the graph that created it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    index: u64,
    graph_id: GraphId,
}

impl VertexId {
    pub(crate) fn new(index: u64, graph_id: GraphId) -> Self {
        Self { index, graph_id }
    }

    /// The numeric part of the identity.
    pub fn index(&self) -> u64 {
        self.index
    }
}

impl EdgeId {
    pub(crate) fn new(index: u64, graph_id: GraphId) -> Self {
        Self { index, graph_id }
    }

    /// The numeric part of the identity.
    pub fn index(&self) -> u64 {
        self.index
    }
}

impl Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.index)
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.index)
    }
}

impl Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.index)
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.index)
    }
}

/// Either kind of identity.  Used to report which record a stale handle
/// pointed at.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ElementId {
    Vertex(VertexId),
    Edge(EdgeId),
}

impl Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementId::Vertex(id) => write!(f, "vertex {id}"),
            ElementId::Edge(id) => write!(f, "edge {id}"),
        }
    }
}

impl From<VertexId> for ElementId {
    fn from(id: VertexId) -> Self {
        ElementId::Vertex(id)
    }
}

impl From<EdgeId> for ElementId {
    fn from(id: EdgeId) -> Self {
        ElementId::Edge(id)
    }
}

/// Issues vertex and edge identities for one graph.
#[derive(Debug)]
pub(crate) struct IdAllocator {
    graph_id: GraphId,
    next_vertex: u64,
    next_edge: u64,
}

impl IdAllocator {
    pub fn new(graph_id: GraphId) -> Self {
        Self {
            graph_id,
            next_vertex: 1,
            next_edge: 1,
        }
    }

    pub fn next_vertex_id(&mut self) -> VertexId {
        let id = VertexId::new(self.next_vertex, self.graph_id);
        self.next_vertex += 1;
        id
    }

    pub fn next_edge_id(&mut self) -> EdgeId {
        let id = EdgeId::new(self.next_edge, self.graph_id);
        self.next_edge += 1;
        id
    }
}
