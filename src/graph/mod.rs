//! The [`Graph`] type: an undirected multigraph whose vertices and edges carry
//! caller-chosen payloads.
//!
//! Records are owned by the graph and named by [`VertexId`] and [`EdgeId`]
//! handles.  Every cross-reference inside the graph (edge ends, the adjacency
//! index) stores handles rather than references, so the only way to reach a
//! record is to resolve its handle against the live tables.  A handle whose
//! record has been erased resolves to [`GraphError::StaleReference`].
//!
//! The adjacency index maps each vertex to the ordered list of edges touching
//! it.  For every live edge with ends `(s, t)` the edge appears once in the
//! list of `s` and once in the list of `t`; a self-loop therefore appears
//! twice in the list of its only vertex, once per end.

use std::{
    collections::{HashMap, HashSet},
    fmt::{self, Debug, Formatter},
};

use crate::{
    edge_ref::{EdgeMut, EdgeRef},
    error::{GraphError, GraphResult},
    graph_id::GraphId,
    id::{EdgeId, ElementId, IdAllocator, VertexId},
    snapshot::{EdgeList, VertexList},
    tracing_support::{debug, trace},
    util::other_value,
    vertex_ref::{VertexMut, VertexRef},
};

/// Storage for a single edge.
pub(crate) struct EdgeRecord<E> {
    pub element: E,
    /// The two ends in insertion order.  The order carries no meaning beyond
    /// reporting.
    pub ends: (VertexId, VertexId),
}

/// A mutable undirected graph with vertex payloads of type `V` and edge
/// payloads of type `E`.
///
/// Parallel edges and self-loops are allowed.  Iteration order of
/// [`Self::vertices`] and [`Self::edges`] is unspecified.
pub struct Graph<V, E> {
    ids: IdAllocator,
    vertices: HashMap<VertexId, V>,
    edges: HashMap<EdgeId, EdgeRecord<E>>,
    adjacency: HashMap<VertexId, Vec<EdgeId>>,
}

impl<V, E> Graph<V, E> {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates a new, empty graph with room for the given number of vertices
    /// and edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            ids: IdAllocator::new(GraphId::new()),
            vertices: HashMap::with_capacity(vertices),
            edges: HashMap::with_capacity(edges),
            adjacency: HashMap::with_capacity(vertices),
        }
    }

    /// Reserves capacity for at least the given number of additional
    /// vertices and edges.
    pub fn reserve(&mut self, additional_vertices: usize, additional_edges: usize) {
        self.vertices.reserve(additional_vertices);
        self.adjacency.reserve(additional_vertices);
        self.edges.reserve(additional_edges);
    }

    // Vertices

    /// Gets the number of vertices in the graph.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the graph has no vertices (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Checks whether `id` names a live vertex of this graph.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Adds a vertex holding `element` and returns its identity.
    pub fn insert_vertex(&mut self, element: V) -> VertexId {
        let id = self.ids.next_vertex_id();
        self.vertices.insert(id, element);
        self.adjacency.insert(id, Vec::new());
        trace!(vertex = %id, "inserted vertex");
        id
    }

    /// Removes a vertex together with every edge touching it, returning the
    /// vertex payload.  The removed edges are also dropped from the adjacency
    /// lists of their other ends.  Erasing an unknown vertex does nothing and
    /// returns `None`.
    pub fn erase_vertex(&mut self, v: VertexId) -> Option<V> {
        let element = self.vertices.remove(&v)?;
        let incident = self.adjacency.remove(&v).unwrap_or_default();
        #[cfg(feature = "tracing")]
        let mut erased_edges = 0usize;
        for eid in incident {
            // A self-loop is listed twice; the second visit finds it gone.
            let Some(record) = self.edges.remove(&eid) else {
                continue;
            };
            #[cfg(feature = "tracing")]
            {
                erased_edges += 1;
            }
            if let Some(other) = other_value(record.ends, &v) {
                if other != v {
                    self.detach(other, eid);
                }
            }
        }
        #[cfg(feature = "tracing")]
        debug!(vertex = %v, erased_edges, "erased vertex");
        Some(element)
    }

    /// Takes a snapshot of the identities of all vertices currently in the
    /// graph.
    pub fn vertices(&self) -> VertexList {
        VertexList::new(self.vertices.keys().copied().collect())
    }

    /// Resolves a vertex handle.
    pub fn vertex(&self, id: VertexId) -> GraphResult<VertexRef<'_, V, E>> {
        self.vertices
            .get(&id)
            .map(|element| VertexRef::new(self, id, element))
            .ok_or(GraphError::StaleReference(ElementId::Vertex(id)))
    }

    /// Resolves a vertex handle for mutation.
    pub fn vertex_mut(&mut self, id: VertexId) -> GraphResult<VertexMut<'_, V, E>> {
        if self.vertices.contains_key(&id) {
            Ok(VertexMut::new(self, id))
        } else {
            Err(GraphError::StaleReference(ElementId::Vertex(id)))
        }
    }

    /// Gets an iterator over every vertex identity and its payload.
    pub fn vertex_elements(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        self.vertices.iter().map(|(id, element)| (*id, element))
    }

    /// Gets an iterator over every vertex identity with a mutable reference
    /// to its payload.
    pub fn vertex_elements_mut(&mut self) -> impl Iterator<Item = (VertexId, &mut V)> + '_ {
        self.vertices.iter_mut().map(|(id, element)| (*id, element))
    }

    pub(crate) fn vertex_element(&self, id: VertexId) -> GraphResult<&V> {
        self.vertices
            .get(&id)
            .ok_or(GraphError::StaleReference(ElementId::Vertex(id)))
    }

    pub(crate) fn vertex_element_mut(&mut self, id: VertexId) -> GraphResult<&mut V> {
        self.vertices
            .get_mut(&id)
            .ok_or(GraphError::StaleReference(ElementId::Vertex(id)))
    }

    /// The adjacency list of `v`, or an empty slice if `v` is not live.
    pub(crate) fn incident_edge_ids(&self, v: VertexId) -> &[EdgeId] {
        self.adjacency.get(&v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Gets the opposite end of each edge touching `v`, in adjacency order.
    /// A vertex reachable through several edges is reported once per edge.
    pub(crate) fn neighbor_ids(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.incident_edge_ids(v).iter().filter_map(move |eid| {
            let record = self.edges.get(eid);
            debug_assert!(record.is_some(), "adjacency lists erased edge {eid}");
            record.and_then(|record| other_value(record.ends, &v))
        })
    }

    // Edges

    /// Gets the number of edges in the graph.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Checks whether `id` names a live edge of this graph.
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    /// Adds an edge between `v` and `u` holding `element` and returns its
    /// identity.  Fails with [`GraphError::UnknownVertex`] if either end is
    /// not a live vertex of this graph; the graph is unchanged in that case.
    pub fn insert_edge(&mut self, v: VertexId, u: VertexId, element: E) -> GraphResult<EdgeId> {
        for end in [v, u] {
            if !self.vertices.contains_key(&end) {
                return Err(GraphError::UnknownVertex(end));
            }
        }
        let id = self.ids.next_edge_id();
        self.edges.insert(
            id,
            EdgeRecord {
                element,
                ends: (v, u),
            },
        );
        self.adjacency.entry(v).or_default().push(id);
        self.adjacency.entry(u).or_default().push(id);
        trace!(edge = %id, start = %v, end = %u, "inserted edge");
        Ok(id)
    }

    /// Removes an edge, dropping it from the adjacency lists of both ends,
    /// and returns its payload.  Erasing an unknown edge does nothing and
    /// returns `None`.
    pub fn erase_edge(&mut self, e: EdgeId) -> Option<E> {
        let record = self.edges.remove(&e)?;
        let (start, end) = record.ends;
        self.detach(start, e);
        if end != start {
            self.detach(end, e);
        }
        trace!(edge = %e, "erased edge");
        Some(record.element)
    }

    /// Takes a snapshot of the identities of all edges currently in the
    /// graph.
    pub fn edges(&self) -> EdgeList {
        EdgeList::new(self.edges.keys().copied().collect())
    }

    /// Resolves an edge handle.
    pub fn edge(&self, id: EdgeId) -> GraphResult<EdgeRef<'_, V, E>> {
        self.edges
            .get(&id)
            .map(|record| EdgeRef::new(self, id, record))
            .ok_or(GraphError::StaleReference(ElementId::Edge(id)))
    }

    /// Resolves an edge handle for mutation.
    pub fn edge_mut(&mut self, id: EdgeId) -> GraphResult<EdgeMut<'_, V, E>> {
        if self.edges.contains_key(&id) {
            Ok(EdgeMut::new(self, id))
        } else {
            Err(GraphError::StaleReference(ElementId::Edge(id)))
        }
    }

    pub(crate) fn edge_record(&self, id: EdgeId) -> GraphResult<&EdgeRecord<E>> {
        self.edges
            .get(&id)
            .ok_or(GraphError::StaleReference(ElementId::Edge(id)))
    }

    pub(crate) fn edge_record_mut(&mut self, id: EdgeId) -> GraphResult<&mut EdgeRecord<E>> {
        self.edges
            .get_mut(&id)
            .ok_or(GraphError::StaleReference(ElementId::Edge(id)))
    }

    /// Removes every occurrence of `e` from the adjacency list of `v`.
    fn detach(&mut self, v: VertexId, e: EdgeId) {
        if let Some(list) = self.adjacency.get_mut(&v) {
            list.retain(|&id| id != e);
        }
    }

    // Whole-graph operations

    /// Removes all vertices and edges.  Identities issued before the call
    /// are not reissued afterwards.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.adjacency.clear();
        debug!("cleared graph");
    }

    /// Partitions the vertices into connected components.
    pub fn connected_components(&self) -> Vec<HashSet<VertexId>> {
        let starts: Vec<VertexId> = self.vertices.keys().copied().collect();
        pathfinding::prelude::connected_components(&starts, |&v| {
            self.neighbor_ids(v).collect::<Vec<_>>()
        })
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes its contents without quotes, for use as a debug map key.
struct Tag(String);

impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<V, E> Debug for Graph<V, E>
where
    V: Debug,
    E: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut vertex_ids: Vec<_> = self.vertices.keys().copied().collect();
        vertex_ids.sort();
        let mut edge_ids: Vec<_> = self.edges.keys().copied().collect();
        edge_ids.sort();

        struct Vertices<'a, V, E>(&'a Graph<V, E>, &'a [VertexId]);
        struct Edges<'a, V, E>(&'a Graph<V, E>, &'a [EdgeId]);

        impl<V: Debug, E> Debug for Vertices<'_, V, E> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_map()
                    .entries(
                        self.1
                            .iter()
                            .map(|id| (Tag(id.to_string()), &self.0.vertices[id])),
                    )
                    .finish()
            }
        }

        impl<V, E: Debug> Debug for Edges<'_, V, E> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_map()
                    .entries(self.1.iter().map(|id| {
                        let record = &self.0.edges[id];
                        let (start, end) = record.ends;
                        (Tag(format!("{id}: {start} -- {end}")), &record.element)
                    }))
                    .finish()
            }
        }

        f.debug_struct("Graph")
            .field("vertices", &Vertices(self, &vertex_ids))
            .field("edges", &Edges(self, &edge_ids))
            .finish()
    }
}
