//! A mutable undirected multigraph with stable vertex and edge handles, and a
//! Dijkstra shortest-path finder built on it.
//!
//! ```
//! use pathgraph::prelude::*;
//!
//! let mut finder = ShortestPathFinder::new();
//! let a = finder.insert_vertex("a");
//! let b = finder.insert_vertex("b");
//! let c = finder.insert_vertex("c");
//! finder.insert_edge(a, b, 5u32)?;
//! finder.insert_edge(a, c, 1)?;
//! finder.insert_edge(c, b, 2)?;
//! assert_eq!(
//!     finder.find_shortest_path(a, b)?,
//!     vec![("a", 0), ("c", 1), ("b", 3)]
//! );
//! # Ok::<(), GraphError>(())
//! ```

pub mod edge_ref;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod shortest_path;
pub mod snapshot;
pub mod tracing_support;
pub mod vertex_ref;

mod graph_id;
mod id;
mod util;

#[cfg(test)]
mod generate_large_graph;
#[cfg(test)]
mod graph_test_support;

pub use edge_ref::{EdgeMut, EdgeRef};
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use id::{EdgeId, ElementId, VertexId};
pub use shortest_path::{Distance, PathVertex, ShortestPathFinder};
pub use snapshot::{Cursor, EdgeList, Snapshot, SnapshotIter, VertexList};
pub use vertex_ref::{VertexMut, VertexRef};
