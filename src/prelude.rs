pub use crate::edge_ref::{EdgeMut, EdgeRef};
pub use crate::error::{GraphError, GraphResult};
pub use crate::graph::Graph;
pub use crate::id::{EdgeId, ElementId, VertexId};
pub use crate::shortest_path::{Distance, PathVertex, ShortestPathFinder};
pub use crate::snapshot::{EdgeList, VertexList};
pub use crate::vertex_ref::{VertexMut, VertexRef};
