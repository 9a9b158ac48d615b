//! Single-source shortest paths over a graph with non-negative edge weights.
//!
//! [`ShortestPathFinder`] owns a private [`Graph`] whose vertex payload is a
//! [`PathVertex`]: the caller's element plus the per-run algorithm state.
//! Each query resets that state on every vertex, so one finder can answer any
//! number of queries against the graph it was built with.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
    fmt::Debug,
};

use pathfinding::num_traits::{Bounded, CheckedAdd, Zero};

use crate::{
    Graph,
    error::{GraphError, GraphResult},
    id::{EdgeId, VertexId},
    tracing_support::{debug, info_span, trace},
};

/// An edge weight.
///
/// The type's maximum value stands for "not reached": a vertex whose shortest
/// distance is exactly `D::max_value()` is reported as unreachable.  Sums
/// that overflow `D` are never shorter than the distance already known, so
/// they are discarded during relaxation.
pub trait Distance: Copy + Ord + CheckedAdd + Zero + Bounded + Debug {}

impl<T> Distance for T where T: Copy + Ord + CheckedAdd + Zero + Bounded + Debug {}

/// Vertex payload of the graph inside a [`ShortestPathFinder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathVertex<V, D> {
    /// Distance from the source of the last run, or `D::max_value()` if the
    /// vertex was not reached.
    pub distance: D,
    pub element: V,
    /// The vertex this one was reached from in the last run.
    pub parent: Option<VertexId>,
}

impl<V, D: Distance> PathVertex<V, D> {
    fn unreached(element: V) -> Self {
        Self {
            distance: D::max_value(),
            element,
            parent: None,
        }
    }

    pub fn is_reached(&self) -> bool {
        self.distance != D::max_value()
    }
}

/// Dijkstra's algorithm over an undirected graph with vertex elements of type
/// `V` and edge weights of type `D`.
///
/// Weights must be non-negative; negative weights are not detected and give
/// meaningless results.
pub struct ShortestPathFinder<V, D> {
    graph: Graph<PathVertex<V, D>, D>,
}

impl<V, D: Distance> ShortestPathFinder<V, D> {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    pub fn insert_vertex(&mut self, element: V) -> VertexId {
        self.graph.insert_vertex(PathVertex::unreached(element))
    }

    /// Joins `v` and `u` with an edge of weight `distance`.
    pub fn insert_edge(&mut self, v: VertexId, u: VertexId, distance: D) -> GraphResult<EdgeId> {
        self.graph.insert_edge(v, u, distance)
    }

    pub fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }

    pub fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    /// Gets the caller's element for `v`.
    pub fn element(&self, v: VertexId) -> GraphResult<&V> {
        self.graph
            .vertex_element(v)
            .map(|state| &state.element)
            .map_err(|_| GraphError::UnknownVertex(v))
    }

    /// A read-only view of the inner graph, including the state left by the
    /// last run.
    pub fn graph(&self) -> &Graph<PathVertex<V, D>, D> {
        &self.graph
    }

    fn check_vertex(&self, v: VertexId) -> GraphResult<()> {
        if self.graph.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex(v))
        }
    }

    /// Runs Dijkstra's algorithm from `source`, leaving the distance and
    /// parent of every vertex in its payload.
    ///
    /// The queue is seeded with every vertex and entries are never removed
    /// early: when a vertex is relaxed a new entry is pushed, and an entry
    /// whose distance no longer matches the vertex's live distance is skipped
    /// when popped.  Vertices still at `D::max_value()` are never expanded.
    fn run(&mut self, source: VertexId) -> GraphResult<()> {
        self.check_vertex(source)?;
        let _span = info_span!("dijkstra", source = %source).entered();

        let mut queue: BinaryHeap<Reverse<(D, VertexId)>> =
            BinaryHeap::with_capacity(self.graph.num_vertices());
        for (id, state) in self.graph.vertex_elements_mut() {
            state.distance = if id == source {
                D::zero()
            } else {
                D::max_value()
            };
            state.parent = None;
            queue.push(Reverse((state.distance, id)));
        }

        #[cfg(feature = "tracing")]
        let (mut expanded, mut skipped) = (0usize, 0usize);
        while let Some(Reverse((distance, v))) = queue.pop() {
            let live = self.graph.vertex_element(v)?.distance;
            if distance != live || live == D::max_value() {
                #[cfg(feature = "tracing")]
                {
                    skipped += 1;
                }
                continue;
            }
            #[cfg(feature = "tracing")]
            {
                expanded += 1;
            }
            let incident = self.graph.vertex(v)?.incident_edges();
            for eid in incident {
                let edge = self.graph.edge(eid)?;
                let weight = *edge.element();
                let u = edge.opposite(v)?.id();
                let Some(candidate) = distance.checked_add(&weight) else {
                    continue;
                };
                let state = self.graph.vertex_element_mut(u)?;
                if candidate < state.distance {
                    trace!(vertex = %u, from = %v, distance = ?candidate, "relaxed");
                    state.distance = candidate;
                    state.parent = Some(v);
                    queue.push(Reverse((candidate, u)));
                }
            }
        }
        #[cfg(feature = "tracing")]
        debug!(source = %source, expanded, skipped, "dijkstra finished");
        Ok(())
    }

    /// Finds a least-cost path from `source` to `target`.
    ///
    /// Returns each vertex element on the path, from `source` to `target`,
    /// paired with its distance from `source`.  If `target` cannot be reached
    /// the result is empty.  If `source == target` the result is the single
    /// entry `(source, 0)`.
    pub fn find_shortest_path(
        &mut self,
        source: VertexId,
        target: VertexId,
    ) -> GraphResult<Vec<(V, D)>>
    where
        V: Clone,
    {
        self.check_vertex(target)?;
        self.run(source)?;
        if !self.graph.vertex_element(target)?.is_reached() {
            debug!(source = %source, target = %target, "target unreachable");
            return Ok(Vec::new());
        }

        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(v) = current {
            let state = self.graph.vertex_element(v)?;
            path.push((state.element.clone(), state.distance));
            current = state.parent;
        }
        path.reverse();
        debug_assert_eq!(path.first().map(|(_, d)| *d), Some(D::zero()));
        Ok(path)
    }

    /// Gets the length of a least-cost path from `source` to `target`, or
    /// `None` if `target` cannot be reached.
    pub fn shortest_distance(
        &mut self,
        source: VertexId,
        target: VertexId,
    ) -> GraphResult<Option<D>> {
        self.check_vertex(target)?;
        self.run(source)?;
        let state = self.graph.vertex_element(target)?;
        Ok(state.is_reached().then_some(state.distance))
    }

    /// Gets the distance from `source` to every vertex reachable from it,
    /// `source` included.
    pub fn shortest_distances(&mut self, source: VertexId) -> GraphResult<HashMap<VertexId, D>> {
        self.run(source)?;
        Ok(self
            .graph
            .vertex_elements()
            .filter(|(_, state)| state.is_reached())
            .map(|(id, state)| (id, state.distance))
            .collect())
    }
}

impl<V, D: Distance> Default for ShortestPathFinder<V, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug, D: Debug> Debug for ShortestPathFinder<V, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortestPathFinder")
            .field("graph", &self.graph)
            .finish()
    }
}
