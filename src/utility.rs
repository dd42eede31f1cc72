use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::*;

use crate::graphs::{edge::WeightedEdge, vec_graph::VecGraph};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} estimated remaining: {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

/// Draws `number_of_edges` edges between uniformly chosen vertices with
/// weights in `0..=max_weight`. Repeated pairs keep the last weight drawn.
pub fn random_edges<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
    number_of_edges: usize,
    max_weight: u64,
) -> Vec<WeightedEdge<u32, u64>> {
    if number_of_vertices == 0 {
        return Vec::new();
    }

    (0..number_of_edges)
        .map(|_| {
            WeightedEdge::new(
                rng.gen_range(0..number_of_vertices),
                rng.gen_range(0..number_of_vertices),
                rng.gen_range(0..=max_weight),
            )
        })
        .collect()
}

/// Random graph over exactly `number_of_vertices` vertices, reproducible
/// from `seed`.
pub fn random_graph(
    seed: u64,
    number_of_vertices: u32,
    number_of_edges: usize,
    max_weight: u64,
) -> VecGraph<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = VecGraph::with_vertices(number_of_vertices);
    random_edges(&mut rng, number_of_vertices, number_of_edges, max_weight)
        .iter()
        .for_each(|edge| graph.set_edge(edge));
    graph
}
