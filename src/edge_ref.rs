use derivative::Derivative;

use crate::{
    Graph,
    error::{GraphError, GraphResult},
    graph::EdgeRecord,
    id::{EdgeId, VertexId},
    snapshot::VertexList,
    util::other_value,
    vertex_ref::{VertexMut, VertexRef},
};

/// A shared handle to a live edge.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Copy(bound = ""))]
pub struct EdgeRef<'g, V, E> {
    graph: &'g Graph<V, E>,
    id: EdgeId,
    record: &'g EdgeRecord<E>,
}

impl<'g, V, E> EdgeRef<'g, V, E> {
    pub(crate) fn new(graph: &'g Graph<V, E>, id: EdgeId, record: &'g EdgeRecord<E>) -> Self {
        Self { graph, id, record }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn graph(&self) -> &'g Graph<V, E> {
        self.graph
    }

    pub fn element(&self) -> &'g E {
        &self.record.element
    }

    /// The two ends in the order they were given to
    /// [`Graph::insert_edge`].
    pub fn ends(&self) -> (VertexId, VertexId) {
        self.record.ends
    }

    /// Takes a two-entry snapshot of the ends.  Both entries are the same
    /// vertex for a self-loop.
    pub fn end_vertices(&self) -> VertexList {
        let (start, end) = self.record.ends;
        VertexList::new(vec![start, end])
    }

    /// Gets the end of this edge that is not `v`; for a self-loop on `v`,
    /// that is `v` itself.
    pub fn opposite(&self, v: VertexId) -> GraphResult<VertexRef<'g, V, E>> {
        let other = other_value(self.record.ends, &v).ok_or(GraphError::NotIncident {
            edge: self.id,
            vertex: v,
        })?;
        self.graph.vertex(other)
    }

    pub fn is_incident_on(&self, v: VertexId) -> bool {
        let (start, end) = self.record.ends;
        start == v || end == v
    }
}

impl<V, E> PartialEq for EdgeRef<'_, V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V, E> Eq for EdgeRef<'_, V, E> {}

impl<V, E> std::fmt::Debug for EdgeRef<'_, V, E>
where
    E: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeRef")
            .field("id", &self.id)
            .field("ends", &self.record.ends)
            .field("element", &self.record.element)
            .finish()
    }
}

/// An exclusive handle to a live edge, giving mutable access to its payload.
pub struct EdgeMut<'g, V, E> {
    graph: &'g mut Graph<V, E>,
    id: EdgeId,
}

impl<'g, V, E> EdgeMut<'g, V, E> {
    pub(crate) fn new(graph: &'g mut Graph<V, E>, id: EdgeId) -> Self {
        debug_assert!(graph.contains_edge(id));
        Self { graph, id }
    }

    fn record(&self) -> &EdgeRecord<E> {
        self.graph
            .edge_record(self.id)
            .expect("edge cannot be erased while borrowed")
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn ends(&self) -> (VertexId, VertexId) {
        self.record().ends
    }

    pub fn element(&self) -> &E {
        &self.record().element
    }

    pub fn element_mut(&mut self) -> &mut E {
        &mut self
            .graph
            .edge_record_mut(self.id)
            .expect("edge cannot be erased while borrowed")
            .element
    }

    pub fn into_element_mut(self) -> &'g mut E {
        &mut self
            .graph
            .edge_record_mut(self.id)
            .expect("edge cannot be erased while borrowed")
            .element
    }

    /// Converts the handle into a mutable handle to the end that is not `v`.
    pub fn into_opposite(self, v: VertexId) -> GraphResult<VertexMut<'g, V, E>> {
        let other = other_value(self.ends(), &v).ok_or(GraphError::NotIncident {
            edge: self.id,
            vertex: v,
        })?;
        self.graph.vertex_mut(other)
    }

    pub fn is_incident_on(&self, v: VertexId) -> bool {
        let (start, end) = self.ends();
        start == v || end == v
    }
}
