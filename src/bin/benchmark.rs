use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::ParallelProgressIterator;
use rand::prelude::*;
use rayon::prelude::*;
use settled_paths::{
    graphs::graph_functions::validate_path,
    shortest_paths,
    utility::{get_progressbar, random_graph},
    Graph, PathError,
};
use tracing::info;

/// Times single source searches on a random graph. The queries share one
/// read-only graph and run in parallel.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short = 'n', long, default_value_t = 10_000)]
    vertices: u32,

    #[arg(short = 'm', long, default_value_t = 50_000)]
    edges: usize,

    #[arg(short = 'w', long, default_value_t = 1_000)]
    max_weight: u64,

    /// Number of single source searches
    #[arg(short, long, default_value_t = 100)]
    queries: usize,

    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.vertices > 0, "the graph needs at least one vertex");

    let graph = random_graph(args.seed, args.vertices, args.edges, args.max_weight);
    info!(
        vertices = graph.number_of_vertices(),
        edges = graph.number_of_edges(),
        "random graph generated"
    );

    let mut rng = StdRng::seed_from_u64(args.seed.wrapping_add(1));
    let requests: Vec<(u32, u32)> = (0..args.queries)
        .map(|_| {
            (
                rng.gen_range(0..args.vertices),
                rng.gen_range(0..args.vertices),
            )
        })
        .collect();

    let bar = get_progressbar("Running searches", requests.len() as u64);
    let durations = requests
        .par_iter()
        .progress_with(bar.clone())
        .map(|(source, target)| -> anyhow::Result<Duration> {
            let start = Instant::now();
            let data = shortest_paths(&graph, source)?;
            let duration = start.elapsed();

            match data.get_path(target) {
                Ok(path) => {
                    let distance = data
                        .get_distance(target)
                        .ok_or_else(|| anyhow::anyhow!("path to unreachable vertex {}", target))?;
                    validate_path(&graph, source, distance, &path).map_err(anyhow::Error::msg)?;
                }
                Err(PathError::UnreachableTarget { .. }) => {}
                Err(error) => return Err(error.into()),
            }

            Ok(duration)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    bar.finish_and_clear();

    let total: Duration = durations.iter().sum();
    println!(
        "Average dijkstra duration over {} searches is {:?}",
        durations.len(),
        total / durations.len().max(1) as u32
    );

    Ok(())
}
