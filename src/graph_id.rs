use std::sync::atomic::{AtomicUsize, Ordering};

/// A global graph identifier counter. Every graph gets a fresh value so that
/// handles issued by one graph never resolve against another.  Wrapping
/// around is technically possible but would only make two graphs share an
/// identifier, which at worst lets a foreign handle with a matching index
/// resolve.
static GRAPH_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique identifier for a graph instance.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct GraphId(usize);

impl GraphId {
    /// Create a new unique graph identifier.
    pub fn new() -> Self {
        GraphId(GRAPH_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for GraphId {
    fn default() -> Self {
        Self::new()
    }
}
