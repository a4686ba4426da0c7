use std::time::{Duration, Instant};

use ordered_float::OrderedFloat;

use barrier_sssp::graph::generators::random_graph;
use barrier_sssp::graph::Graph;
use barrier_sssp::{BarrierSSSP, Dijkstra, DirectedGraph, ShortestPathAlgorithm};

fn run_algorithm<A>(
    name: &str,
    algorithm: &A,
    graph: &DirectedGraph<OrderedFloat<f64>>,
    source: usize,
) -> Duration
where
    A: ShortestPathAlgorithm<OrderedFloat<f64>, DirectedGraph<OrderedFloat<f64>>>,
{
    let start = Instant::now();
    let result = algorithm
        .compute_shortest_paths(graph, source)
        .expect("benchmark graphs are valid");
    let duration = start.elapsed();

    let reachable = result.distances.iter().flatten().count();
    println!("  {name}: {reachable} reachable vertices in {duration:?}");

    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = [1_000, 10_000, 50_000, 100_000];
    // Average number of edges per vertex.
    let edge_factor = 4;

    println!("Benchmark: Dijkstra vs BMSSP");
    println!("Edge factor: {edge_factor} edges per vertex");

    let dijkstra = Dijkstra::new();
    let barrier = BarrierSSSP::new();

    for (round, &size) in graph_sizes.iter().enumerate() {
        let graph = random_graph(size, size * edge_factor, 0xBE9C_0000 + round as u64);
        println!(
            "Graph with {} vertices and {} edges:",
            graph.vertex_count(),
            graph.edge_count()
        );

        let dijkstra_time = run_algorithm("dijkstra", &dijkstra, &graph, 0);
        let barrier_time = run_algorithm("bmssp   ", &barrier, &graph, 0);

        let ratio = dijkstra_time.as_secs_f64() / barrier_time.as_secs_f64().max(f64::EPSILON);
        println!("  speedup over dijkstra: {ratio:.2}x");
    }
}
