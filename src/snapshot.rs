//! Snapshots of vertex and edge identities.
//!
//! A [`Snapshot`] records which identities existed when it was taken and
//! nothing else: it holds no borrow of the graph, and each identity is
//! resolved against the live graph only when it is visited.  A snapshot
//! taken before an erase therefore still lists the erased identity, and
//! visiting that entry yields [`GraphError::StaleReference`] instead of the
//! erased record.
//!
//! [`GraphError::StaleReference`]: crate::GraphError::StaleReference

use derivative::Derivative;

use crate::{
    Graph,
    edge_ref::{EdgeMut, EdgeRef},
    error::GraphResult,
    id::{EdgeId, VertexId},
    vertex_ref::{VertexMut, VertexRef},
};

/// An ordered list of identities captured at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<I> {
    ids: Vec<I>,
}

/// A snapshot of vertex identities.
pub type VertexList = Snapshot<VertexId>;

/// A snapshot of edge identities.
pub type EdgeList = Snapshot<EdgeId>;

impl<I: Copy + Eq> Snapshot<I> {
    pub(crate) fn new(ids: Vec<I>) -> Self {
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The captured identities, in snapshot order.
    pub fn ids(&self) -> &[I] {
        &self.ids
    }

    pub fn contains(&self, id: I) -> bool {
        self.ids.contains(&id)
    }

    /// Creates a forward-only cursor positioned before the first entry.
    pub fn cursor(&self) -> Cursor<'_, I> {
        Cursor {
            ids: &self.ids,
            position: 0,
        }
    }
}

impl<I> IntoIterator for Snapshot<I> {
    type Item = I;
    type IntoIter = std::vec::IntoIter<I>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.into_iter()
    }
}

impl VertexList {
    /// Resolves each entry against `graph` as the iterator reaches it.
    pub fn iter<'s, 'g, V, E>(
        &'s self,
        graph: &'g Graph<V, E>,
    ) -> SnapshotIter<'s, 'g, VertexId, V, E> {
        SnapshotIter {
            ids: self.ids.iter(),
            graph,
        }
    }

    /// Calls `f` with a mutable handle to each vertex in snapshot order.
    /// Stops at the first entry whose vertex has been erased and returns
    /// its [`StaleReference`](crate::GraphError::StaleReference) error.
    pub fn for_each_mut<V, E>(
        &self,
        graph: &mut Graph<V, E>,
        mut f: impl FnMut(VertexMut<'_, V, E>),
    ) -> GraphResult<()> {
        for &id in &self.ids {
            f(graph.vertex_mut(id)?);
        }
        Ok(())
    }
}

impl EdgeList {
    /// Resolves each entry against `graph` as the iterator reaches it.
    pub fn iter<'s, 'g, V, E>(
        &'s self,
        graph: &'g Graph<V, E>,
    ) -> SnapshotIter<'s, 'g, EdgeId, V, E> {
        SnapshotIter {
            ids: self.ids.iter(),
            graph,
        }
    }

    /// Calls `f` with a mutable handle to each edge in snapshot order.
    /// Stops at the first entry whose edge has been erased.
    pub fn for_each_mut<V, E>(
        &self,
        graph: &mut Graph<V, E>,
        mut f: impl FnMut(EdgeMut<'_, V, E>),
    ) -> GraphResult<()> {
        for &id in &self.ids {
            f(graph.edge_mut(id)?);
        }
        Ok(())
    }
}

/// Iterator returned by [`VertexList::iter`] and [`EdgeList::iter`].
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct SnapshotIter<'s, 'g, I, V, E> {
    ids: std::slice::Iter<'s, I>,
    graph: &'g Graph<V, E>,
}

impl<'g, V, E> Iterator for SnapshotIter<'_, 'g, VertexId, V, E> {
    type Item = GraphResult<VertexRef<'g, V, E>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| self.graph.vertex(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<'g, V, E> Iterator for SnapshotIter<'_, 'g, EdgeId, V, E> {
    type Item = GraphResult<EdgeRef<'g, V, E>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| self.graph.edge(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

/// A forward-only position in a snapshot.  Unlike [`SnapshotIter`] the
/// cursor does not hold the graph, so the graph may be changed between
/// steps.
#[derive(Debug, Clone)]
pub struct Cursor<'s, I> {
    ids: &'s [I],
    position: usize,
}

impl<I: Copy> Cursor<'_, I> {
    /// The identity the next step will visit.
    pub fn peek_id(&self) -> Option<I> {
        self.ids.get(self.position).copied()
    }

    /// Number of entries not yet visited.
    pub fn remaining(&self) -> usize {
        self.ids.len() - self.position
    }

    /// Steps past the next entry without resolving it.
    pub fn advance(&mut self) -> Option<I> {
        let id = self.peek_id()?;
        self.position += 1;
        Some(id)
    }
}

impl Cursor<'_, VertexId> {
    pub fn next_ref<'g, V, E>(
        &mut self,
        graph: &'g Graph<V, E>,
    ) -> Option<GraphResult<VertexRef<'g, V, E>>> {
        self.advance().map(|id| graph.vertex(id))
    }

    pub fn next_mut<'g, V, E>(
        &mut self,
        graph: &'g mut Graph<V, E>,
    ) -> Option<GraphResult<VertexMut<'g, V, E>>> {
        self.advance().map(|id| graph.vertex_mut(id))
    }
}

impl Cursor<'_, EdgeId> {
    pub fn next_ref<'g, V, E>(
        &mut self,
        graph: &'g Graph<V, E>,
    ) -> Option<GraphResult<EdgeRef<'g, V, E>>> {
        self.advance().map(|id| graph.edge(id))
    }

    pub fn next_mut<'g, V, E>(
        &mut self,
        graph: &'g mut Graph<V, E>,
    ) -> Option<GraphResult<EdgeMut<'g, V, E>>> {
        self.advance().map(|id| graph.edge_mut(id))
    }
}
