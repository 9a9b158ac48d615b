//! Prints the shortest route between two airports of a small flight network.
//!
//! Usage:
//!   cargo run --example flight_routes -- BWI SFO
//!   cargo run --example flight_routes -- --all BWI

use std::collections::HashMap;
use std::process;

use clap::Parser;
use pathgraph::prelude::*;
use pathgraph::tracing_support::init_tracing;

mod flight_network;

use flight_network::FLIGHTS;

/// Find the shortest flight route between two airports.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Airport code to depart from
    from: String,

    /// Airport code to arrive at
    to: Option<String>,

    /// Print the distance to every airport instead of a single route
    #[arg(long)]
    all: bool,

    /// Log the search through the tracing subscriber
    #[arg(long)]
    verbose: bool,
}

type Network = (ShortestPathFinder<&'static str, u32>, HashMap<&'static str, VertexId>);

fn build_network() -> GraphResult<Network> {
    let mut finder = ShortestPathFinder::new();
    let mut airports = HashMap::new();
    for &(from, to, miles) in FLIGHTS {
        let from = *airports
            .entry(from)
            .or_insert_with(|| finder.insert_vertex(from));
        let to = *airports.entry(to).or_insert_with(|| finder.insert_vertex(to));
        finder.insert_edge(from, to, miles)?;
    }
    Ok((finder, airports))
}

fn lookup_or_exit(airports: &HashMap<&'static str, VertexId>, code: &str) -> VertexId {
    match airports.get(code.to_ascii_uppercase().as_str()) {
        Some(&id) => id,
        None => {
            let mut known: Vec<_> = airports.keys().copied().collect();
            known.sort();
            eprintln!("Unknown airport '{code}'; known airports: {}", known.join(", "));
            process::exit(1);
        }
    }
}

fn run(args: Args) -> GraphResult<()> {
    let (mut finder, airports) = build_network()?;
    let from = lookup_or_exit(&airports, &args.from);

    if args.all || args.to.is_none() {
        let distances = finder.shortest_distances(from)?;
        let mut rows: Vec<(&str, u32)> = distances
            .iter()
            .map(|(id, &miles)| finder.element(*id).map(|&code| (code, miles)))
            .collect::<GraphResult<_>>()?;
        rows.sort_by_key(|&(code, miles)| (miles, code));
        for (code, miles) in rows {
            println!("{code}\t{miles}");
        }
        return Ok(());
    }

    let to_code = args.to.as_deref().unwrap_or_default();
    let to = lookup_or_exit(&airports, to_code);
    let route = finder.find_shortest_path(from, to)?;
    if route.is_empty() {
        println!("No route from {} to {}", args.from, to_code);
        return Ok(());
    }
    let stops: Vec<String> = route
        .iter()
        .map(|(code, miles)| format!("{code} ({miles})"))
        .collect();
    println!("{}", stops.join(" -> "));
    Ok(())
}

fn main() {
    let args = Args::parse();
    if args.verbose {
        init_tracing();
    }
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
