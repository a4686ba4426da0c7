//! Graph generators for tests and benchmarks.

use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::directed::DirectedGraph;

/// Generates a uniform random digraph with `n` vertices and roughly `m`
/// edges. Self-loops are skipped; weights are drawn from `[1.0, 100.0)`.
pub fn random_graph(n: usize, m: usize, seed: u64) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(n);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut added = 0;
    while added < m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let weight = OrderedFloat(rng.gen_range(1.0..100.0));
        graph.add_edge(u, v, weight);
        added += 1;
    }

    graph
}

/// Like `random_graph`, but with small integer-valued weights so that many
/// distinct paths share the same total length.
pub fn random_graph_with_ties(n: usize, m: usize, seed: u64) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(n);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut added = 0;
    while added < m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let weight = OrderedFloat(rng.gen_range(0..=4) as f64);
        graph.add_edge(u, v, weight);
        added += 1;
    }

    graph
}

/// Generates a `width` x `height` grid with unit-cost cardinal moves and
/// 1.4-cost diagonal moves in all eight directions.
pub fn grid_graph(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(width * height);

    let directions = [
        (0, -1, 1.0),
        (1, 0, 1.0),
        (0, 1, 1.0),
        (-1, 0, 1.0),
        (1, -1, 1.4),
        (1, 1, 1.4),
        (-1, 1, 1.4),
        (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    graph
}
