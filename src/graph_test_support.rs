use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::tracing_support::{info_span, init_tracing};
use crate::{EdgeId, Graph, VertexId};

/// One step of a randomly generated edit script.  Indices select among the
/// records that are live when the step runs, modulo their number.
#[derive(Debug, Clone)]
pub enum GraphOp {
    InsertVertex(u8),
    InsertEdge(usize, usize, u8),
    SelfLoop(usize, u8),
    ParallelEdge(usize, u8),
    EraseVertex(usize),
    EraseEdge(usize),
}

impl Arbitrary for GraphOp {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 16 {
            0..=4 => GraphOp::InsertVertex(u8::arbitrary(g)),
            5..=10 => {
                GraphOp::InsertEdge(usize::arbitrary(g), usize::arbitrary(g), u8::arbitrary(g))
            }
            11 => GraphOp::SelfLoop(usize::arbitrary(g), u8::arbitrary(g)),
            12 => GraphOp::ParallelEdge(usize::arbitrary(g), u8::arbitrary(g)),
            13 => GraphOp::EraseVertex(usize::arbitrary(g)),
            _ => GraphOp::EraseEdge(usize::arbitrary(g)),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match *self {
            GraphOp::InsertEdge(i, j, w) => Box::new(
                w.shrink()
                    .map(move |w| GraphOp::InsertEdge(i, j, w))
                    .chain(std::iter::once(GraphOp::SelfLoop(i, w))),
            ),
            _ => Box::new(std::iter::empty()),
        }
    }
}

/// An arbitrary graph, described by the edit script that builds it.  The
/// script starts with a few vertex insertions so most scripts produce edges.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub ops: Vec<GraphOp>,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_seed_vertices = usize::arbitrary(g) % 8;
        let num_ops = usize::arbitrary(g) % 60;
        let mut ops: Vec<GraphOp> = (0..num_seed_vertices)
            .map(|_| GraphOp::InsertVertex(u8::arbitrary(g)))
            .collect();
        ops.extend((0..num_ops).map(|_| GraphOp::arbitrary(g)));
        ArbGraph { ops }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.ops.shrink().map(|ops| ArbGraph { ops }))
    }
}

/// A graph built from an [`ArbGraph`] script, with the identities the script
/// produced.
pub struct BuiltGraph {
    pub graph: Graph<u8, u8>,
    /// Live vertices in insertion order.
    pub vertices: Vec<VertexId>,
    /// Live edges in insertion order.
    pub edges: Vec<EdgeId>,
    pub erased_vertices: Vec<VertexId>,
    pub erased_edges: Vec<EdgeId>,
}

impl BuiltGraph {
    /// Picks a live vertex, or `None` if there are none.
    pub fn pick_vertex(&self, index: usize) -> Option<VertexId> {
        (!self.vertices.is_empty()).then(|| self.vertices[index % self.vertices.len()])
    }

    pub fn pick_edge(&self, index: usize) -> Option<EdgeId> {
        (!self.edges.is_empty()).then(|| self.edges[index % self.edges.len()])
    }
}

impl ArbGraph {
    pub fn build(&self) -> BuiltGraph {
        let mut built = BuiltGraph {
            graph: Graph::new(),
            vertices: Vec::new(),
            edges: Vec::new(),
            erased_vertices: Vec::new(),
            erased_edges: Vec::new(),
        };
        for op in &self.ops {
            let BuiltGraph {
                graph,
                vertices,
                edges,
                erased_vertices,
                erased_edges,
            } = &mut built;
            match *op {
                GraphOp::InsertVertex(element) => vertices.push(graph.insert_vertex(element)),
                GraphOp::InsertEdge(i, j, element) if !vertices.is_empty() => {
                    let v = vertices[i % vertices.len()];
                    let u = vertices[j % vertices.len()];
                    edges.push(graph.insert_edge(v, u, element).unwrap());
                }
                GraphOp::SelfLoop(i, element) if !vertices.is_empty() => {
                    let v = vertices[i % vertices.len()];
                    edges.push(graph.insert_edge(v, v, element).unwrap());
                }
                GraphOp::ParallelEdge(i, element) if !edges.is_empty() => {
                    let (v, u) = graph.edge(edges[i % edges.len()]).unwrap().ends();
                    edges.push(graph.insert_edge(u, v, element).unwrap());
                }
                GraphOp::EraseVertex(i) if !vertices.is_empty() => {
                    let v = vertices.remove(i % vertices.len());
                    assert!(graph.erase_vertex(v).is_some());
                    erased_vertices.push(v);
                    edges.retain(|&e| {
                        let live = graph.contains_edge(e);
                        if !live {
                            erased_edges.push(e);
                        }
                        live
                    });
                }
                GraphOp::EraseEdge(i) if !edges.is_empty() => {
                    let e = edges.remove(i % edges.len());
                    assert!(graph.erase_edge(e).is_some());
                    erased_edges.push(e);
                }
                _ => {}
            }
        }
        built
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks the internal consistency of a graph: every handle it reports
/// resolves, and the adjacency index lists each live edge exactly once per
/// end and nothing else.
pub fn check_graph_consistency<V, E>(graph: &Graph<V, E>) {
    init_tracing();
    let _span = info_span!("check_graph_consistency").entered();

    let vertices = graph.vertices();
    let edges = graph.edges();
    assert_eq!(vertices.len(), graph.num_vertices());
    assert_eq!(edges.len(), graph.num_edges());
    assert!(!has_duplicates(vertices.ids().iter().copied()));
    assert!(!has_duplicates(edges.ids().iter().copied()));

    // Occurrences of each edge across all adjacency lists.
    let mut slots: HashMap<EdgeId, usize> = HashMap::new();
    for vertex in vertices.iter(graph) {
        let vertex = vertex.unwrap();
        let incident = vertex.incident_edges();
        assert_eq!(incident.len(), vertex.degree());
        for edge in incident.iter(graph) {
            let edge = edge.unwrap_or_else(|err| panic!("{} lists {err}", vertex.id()));
            assert!(edge.is_incident_on(vertex.id()));
            *slots.entry(edge.id()).or_default() += 1;
        }
    }

    for edge in edges.iter(graph) {
        let edge = edge.unwrap();
        let (start, end) = edge.ends();
        assert!(graph.contains_vertex(start));
        assert!(graph.contains_vertex(end));
        assert_eq!(slots.get(&edge.id()), Some(&2), "slots of {}", edge.id());
        let count_in = |v: VertexId| {
            graph
                .vertex(v)
                .unwrap()
                .incident_edges()
                .ids()
                .iter()
                .filter(|&&e| e == edge.id())
                .count()
        };
        if start == end {
            assert_eq!(count_in(start), 2);
        } else {
            assert_eq!(count_in(start), 1);
            assert_eq!(count_in(end), 1);
        }
    }
    assert_eq!(slots.len(), graph.num_edges());
}
