#![allow(dead_code)]
use std::collections::HashMap;

use pathgraph::prelude::*;

#[path = "../demos/flight_network.rs"]
mod flight_network;

pub use flight_network::FLIGHTS;

pub const AIRPORTS: &[&str] = &["SFO", "LAX", "ORD", "DFW", "MIA", "BWI", "JFK", "PVD", "BOS"];

/// The six-vertex graph with edges A-B 8, A-C 2, A-D 4, B-C 7, B-E 2, C-D 1,
/// C-E 3, C-F 9, D-F 5.
pub const LETTERS: &[(char, char, u32)] = &[
    ('A', 'B', 8),
    ('A', 'C', 2),
    ('A', 'D', 4),
    ('B', 'C', 7),
    ('B', 'E', 2),
    ('C', 'D', 1),
    ('C', 'E', 3),
    ('C', 'F', 9),
    ('D', 'F', 5),
];

/// Builds a path finder from a vertex list and a weighted edge list,
/// returning the finder and a map from each element to its vertex.
pub fn build_finder<V>(
    elements: impl IntoIterator<Item = V>,
    edges: &[(V, V, u32)],
) -> (ShortestPathFinder<V, u32>, HashMap<V, VertexId>)
where
    V: Copy + Eq + std::hash::Hash,
{
    let mut finder = ShortestPathFinder::new();
    let ids: HashMap<V, VertexId> = elements
        .into_iter()
        .map(|element| (element, finder.insert_vertex(element)))
        .collect();
    for &(v, u, distance) in edges {
        finder.insert_edge(ids[&v], ids[&u], distance).unwrap();
    }
    (finder, ids)
}

pub fn flights() -> (ShortestPathFinder<&'static str, u32>, HashMap<&'static str, VertexId>) {
    build_finder(AIRPORTS.iter().copied(), FLIGHTS)
}

pub fn letters() -> (ShortestPathFinder<char, u32>, HashMap<char, VertexId>) {
    build_finder("ABCDEF".chars(), LETTERS)
}
