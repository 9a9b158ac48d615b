//! The nine-airport flight network shared by the demo and the integration
//! tests.

/// Non-stop routes between nine airports, with distances in miles.
pub const FLIGHTS: &[(&str, &str, u32)] = &[
    ("SFO", "LAX", 337),
    ("SFO", "DFW", 1464),
    ("SFO", "ORD", 1846),
    ("SFO", "BOS", 2704),
    ("LAX", "DFW", 1235),
    ("LAX", "MIA", 2342),
    ("DFW", "MIA", 1121),
    ("DFW", "ORD", 802),
    ("DFW", "JFK", 1391),
    ("ORD", "BWI", 621),
    ("ORD", "BOS", 867),
    ("ORD", "PVD", 849),
    ("ORD", "JFK", 740),
    ("BWI", "MIA", 946),
    ("BWI", "JFK", 184),
    ("JFK", "PVD", 144),
    ("JFK", "BOS", 187),
    ("JFK", "MIA", 1090),
    ("MIA", "BOS", 1258),
];
