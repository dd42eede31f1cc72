use std::collections::BTreeMap;

use anyhow::{anyhow, Context};
use clap::Parser;
use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;
use settled_paths::{shortest_paths, Graph, HashGraph, PathError, WeightedEdge};
use tracing::info;

/// Prints the shortest paths from a start vertex to every other vertex.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Vertex the search starts from
    #[arg(short, long, default_value = "A")]
    start: String,

    /// Edge as TAIL:HEAD:WEIGHT, repeatable. Without any edge a small example
    /// graph is used
    #[arg(short, long = "edge", value_parser = parse_edge)]
    edges: Vec<WeightedEdge<String, i64>>,

    /// Print distances and paths as json
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    start: String,
    distances: BTreeMap<String, Option<i64>>,
    paths: BTreeMap<String, Option<Vec<String>>>,
}

fn parse_edge(edge: &str) -> anyhow::Result<WeightedEdge<String, i64>> {
    let (tail, head, weight) = edge
        .split(':')
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected TAIL:HEAD:WEIGHT, got {}", edge))?;
    let weight = weight
        .trim()
        .parse()
        .with_context(|| format!("invalid weight in edge {}", edge))?;

    Ok(WeightedEdge::new(tail.to_string(), head.to_string(), weight))
}

fn example_edges() -> Vec<WeightedEdge<String, i64>> {
    [
        ("A", "B", 6),
        ("A", "D", 1),
        ("B", "A", 6),
        ("B", "C", 5),
        ("B", "D", 2),
        ("B", "E", 2),
        ("C", "B", 5),
        ("C", "E", 5),
        ("D", "A", 1),
        ("D", "B", 2),
        ("D", "E", 1),
        ("E", "B", 2),
        ("E", "C", 5),
        ("E", "D", 1),
    ]
    .into_iter()
    .map(|(tail, head, weight)| {
        WeightedEdge::from((tail.to_string(), head.to_string(), weight))
    })
    .collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let edges = if args.edges.is_empty() {
        info!("no edges given, using the example graph");
        example_edges()
    } else {
        args.edges
    };
    let graph = HashGraph::from_edges(&edges);
    info!(
        vertices = graph.number_of_vertices(),
        edges = graph.number_of_edges(),
        "graph built"
    );

    let data = shortest_paths(&graph, &args.start)?;

    let targets = graph
        .vertices()
        .filter(|vertex| vertex != &args.start)
        .sorted()
        .collect_vec();
    let paths: Vec<_> = targets
        .par_iter()
        .map(|target| match data.get_path(target) {
            Ok(path) => Ok((target.clone(), Some(path))),
            Err(PathError::UnreachableTarget { .. }) => Ok((target.clone(), None)),
            Err(error) => Err(error),
        })
        .collect::<Result<_, _>>()?;

    if args.json {
        let report = Report {
            start: args.start.clone(),
            distances: data
                .distances
                .iter()
                .map(|(vertex, distance)| (vertex.clone(), *distance))
                .collect(),
            paths: paths
                .iter()
                .map(|(target, path)| (target.clone(), path.as_ref().map(|p| p.vertices.clone())))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Graph:");
    for edge in graph
        .edges()
        .iter()
        .sorted_by_key(|edge| (edge.tail().clone(), edge.head().clone()))
    {
        println!("{} --({})--> {}", edge.tail(), edge.weight(), edge.head());
    }
    println!();

    println!("Shortest paths from vertex {}:", args.start);
    for (target, path) in paths {
        match path {
            Some(path) => println!(
                "To {}: distance = {}, path = {}",
                target,
                path.weight,
                path.vertices.join(" -> ")
            ),
            None => println!("To {}: unreachable", target),
        }
    }

    Ok(())
}
