use crate::{Graph, VertexId};

/// Appends vertices and edges to a graph, numbering the payloads it asks for.
struct Grower<'g, V, E, FV, FE> {
    graph: &'g mut Graph<V, E>,
    vertices: Vec<VertexId>,
    new_vertex_element: FV,
    new_edge_element: FE,
    vertex_counter: usize,
    edge_counter: usize,
}

impl<V, E, FV, FE> Grower<'_, V, E, FV, FE>
where
    FV: FnMut(usize) -> V,
    FE: FnMut(usize) -> E,
{
    fn add_vertex(&mut self) -> usize {
        let id = self
            .graph
            .insert_vertex((self.new_vertex_element)(self.vertex_counter));
        self.vertex_counter += 1;
        self.vertices.push(id);
        self.vertices.len() - 1
    }

    fn connect(&mut self, i: usize, j: usize) {
        let element = (self.new_edge_element)(self.edge_counter);
        self.edge_counter += 1;
        self.graph
            .insert_edge(self.vertices[i], self.vertices[j], element)
            .expect("generated ends are live");
    }

    /// Adds `size` vertices and joins each pair whose indices satisfy
    /// `linked`.  Returns the index of the first new vertex.
    fn cluster(&mut self, size: usize, linked: impl Fn(usize, usize) -> bool) -> usize {
        let start = self.vertices.len();
        for _ in 0..size {
            self.add_vertex();
        }
        for i in start..self.vertices.len() {
            for j in (i + 1)..self.vertices.len() {
                if linked(i, j) {
                    self.connect(i, j);
                }
            }
        }
        start
    }
}

/// Generates a large graph with an irregular structure, using closures to
/// produce the vertex and edge payloads from consecutive indices.
///
/// The graph contains:
/// - a dense cluster (40 vertices, ~60% of pairs joined)
/// - a medium cluster (60 vertices, ~30%)
/// - a sparse cluster (120 vertices, ~8%)
/// - 15 hubs joined to many earlier vertices
/// - 80 scattered vertices with one to three edges each
/// - 10 bridges joining the three clusters
/// - long-range edges, parallel pairs and self-loops
///
/// The result has 325 vertices and 3474 edges (40 of them self-loops) in one
/// connected component.
pub fn generate_large_graph<V, E, FV, FE>(
    graph: &mut Graph<V, E>,
    new_vertex_element: FV,
    new_edge_element: FE,
) -> Vec<VertexId>
where
    FV: FnMut(usize) -> V,
    FE: FnMut(usize) -> E,
{
    let mut grower = Grower {
        graph,
        vertices: Vec::new(),
        new_vertex_element,
        new_edge_element,
        vertex_counter: 0,
        edge_counter: 0,
    };

    let dense = grower.cluster(40, |i, j| (i * 7 + j * 11) % 10 < 6);
    let medium = grower.cluster(60, |i, j| (i * 13 + j * 17) % 10 < 3);
    let sparse = grower.cluster(120, |i, j| (i * 19 + j * 23) % 100 < 8);

    let hubs = grower.vertices.len();
    for h in 0..15 {
        let hub = grower.add_vertex();
        for i in 0..hub {
            if ((hubs + h) * 29 + i * 31) % 7 < 3 {
                grower.connect(hub, i);
            }
        }
    }

    for _ in 0..80 {
        let v = grower.add_vertex();
        let num_links = v % 3 + 1;
        for c in 0..num_links {
            let target = (v * 41 + c * 43) % v;
            grower.connect(v, target);
        }
    }

    for b in 0..10 {
        let bridge = grower.add_vertex();
        grower.connect(bridge, dense + (b * 47) % (medium - dense));
        grower.connect(bridge, medium + (b * 53) % (sparse - medium));
        grower.connect(bridge, sparse + (b * 59) % (hubs - sparse));
    }

    let n = grower.vertices.len();
    for i in 0..150 {
        let a = (i * 61) % n;
        let b = (i * 67 + 100) % n;
        if a != b {
            grower.connect(a, b);
        }
    }

    for i in 0..40 {
        let a = (i * 73 + 7) % n;
        let b = (i * 79 + 11) % n;
        if a != b {
            grower.connect(a, b);
            grower.connect(b, a);
        }
    }

    for i in 0..40 {
        let a = (i * 71) % n;
        grower.connect(a, a);
    }

    grower.vertices
}
