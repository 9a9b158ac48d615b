use derivative::Derivative;

use crate::{Graph, edge_ref::EdgeRef, id::VertexId, snapshot::EdgeList};

/// A shared handle to a live vertex.
///
/// Two `VertexRef`s compare equal when they name the same vertex.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Copy(bound = ""))]
pub struct VertexRef<'g, V, E> {
    graph: &'g Graph<V, E>,
    id: VertexId,
    element: &'g V,
}

impl<'g, V, E> VertexRef<'g, V, E> {
    pub(crate) fn new(graph: &'g Graph<V, E>, id: VertexId, element: &'g V) -> Self {
        Self { graph, id, element }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn graph(&self) -> &'g Graph<V, E> {
        self.graph
    }

    pub fn element(&self) -> &'g V {
        self.element
    }

    /// Returns true if some edge joins this vertex to `other`.  A vertex is
    /// adjacent to itself only through a self-loop.
    pub fn is_adjacent_to(&self, other: VertexId) -> bool {
        self.graph.neighbor_ids(self.id).any(|n| n == other)
    }

    /// Takes a snapshot of the edges touching this vertex, in insertion
    /// order.  A self-loop is listed twice.
    pub fn incident_edges(&self) -> EdgeList {
        EdgeList::new(self.graph.incident_edge_ids(self.id).to_vec())
    }

    /// Gets the handles of the edges touching this vertex.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'g, V, E>> + 'g {
        let graph = self.graph;
        graph
            .incident_edge_ids(self.id)
            .iter()
            .filter_map(move |&eid| graph.edge(eid).ok())
    }

    /// Number of edge ends at this vertex; a self-loop counts twice.
    pub fn degree(&self) -> usize {
        self.graph.incident_edge_ids(self.id).len()
    }

    /// Gets the vertex at the far end of each incident edge.  A neighbor
    /// joined by several edges is reported once per edge.
    pub fn neighbors(&self) -> impl Iterator<Item = VertexRef<'g, V, E>> + 'g {
        let graph = self.graph;
        graph
            .neighbor_ids(self.id)
            .filter_map(move |n| graph.vertex(n).ok())
    }
}

impl<V, E> PartialEq for VertexRef<'_, V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V, E> Eq for VertexRef<'_, V, E> {}

impl<V, E> std::fmt::Debug for VertexRef<'_, V, E>
where
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexRef")
            .field("id", &self.id)
            .field("element", self.element)
            .finish()
    }
}

/// An exclusive handle to a live vertex, giving mutable access to its
/// payload.
pub struct VertexMut<'g, V, E> {
    graph: &'g mut Graph<V, E>,
    id: VertexId,
}

impl<'g, V, E> VertexMut<'g, V, E> {
    pub(crate) fn new(graph: &'g mut Graph<V, E>, id: VertexId) -> Self {
        debug_assert!(graph.contains_vertex(id));
        Self { graph, id }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn element(&self) -> &V {
        self.graph
            .vertex_element(self.id)
            .expect("vertex cannot be erased while borrowed")
    }

    pub fn element_mut(&mut self) -> &mut V {
        self.graph
            .vertex_element_mut(self.id)
            .expect("vertex cannot be erased while borrowed")
    }

    /// Converts the handle into a mutable reference to the payload that
    /// lives as long as the graph borrow.
    pub fn into_element_mut(self) -> &'g mut V {
        self.graph
            .vertex_element_mut(self.id)
            .expect("vertex cannot be erased while borrowed")
    }

    pub fn is_adjacent_to(&self, other: VertexId) -> bool {
        self.graph.neighbor_ids(self.id).any(|n| n == other)
    }

    pub fn incident_edges(&self) -> EdgeList {
        EdgeList::new(self.graph.incident_edge_ids(self.id).to_vec())
    }
}
