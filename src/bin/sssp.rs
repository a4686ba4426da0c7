use anyhow::{bail, Context, Result};
use clap::Parser;
use ordered_float::OrderedFloat;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use barrier_sssp::{
    BarrierSSSP, Dijkstra, DirectedGraph, ShortestPathAlgorithm, ShortestPathResult,
};

#[derive(Parser, Debug)]
#[command(name = "sssp")]
#[command(about = "Run a single-source shortest path algorithm over an edge-list graph.", long_about = None)]
struct Cli {
    /// Path to the graph file: first line is the vertex count, every further
    /// line is `from to weight`
    #[arg(short, long)]
    graph: PathBuf,

    /// Source vertex id
    #[arg(short, long)]
    source: usize,

    #[arg(short, long, default_value_t = String::from("bmssp"))]
    algorithm: String,

    /// Write `vertex distance` lines to this file instead of a stdout summary
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Disable diagnostic logging
    #[arg(long, default_value_t = false)]
    no_log: bool,
}

enum Algorithm {
    Bmssp,
    Dijkstra,
}

impl Algorithm {
    fn parse(name: &str) -> Result<Self> {
        match name {
            "bmssp" => Ok(Algorithm::Bmssp),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => bail!("unknown algorithm {other:?}, expected \"bmssp\" or \"dijkstra\""),
        }
    }

    fn run(
        &self,
        graph: &DirectedGraph<OrderedFloat<f64>>,
        source: usize,
    ) -> barrier_sssp::Result<ShortestPathResult<OrderedFloat<f64>>> {
        match self {
            Algorithm::Bmssp => BarrierSSSP::new().compute_shortest_paths(graph, source),
            Algorithm::Dijkstra => Dijkstra::new().compute_shortest_paths(graph, source),
        }
    }
}

fn parse_graph(text: &str) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    let vertices: usize = lines
        .next()
        .context("empty graph file")?
        .parse()
        .context("parsing the vertex count")?;
    let mut graph = DirectedGraph::with_vertices(vertices);

    for (number, line) in lines.enumerate() {
        let mut fields = line.split_whitespace();
        let edge = (|| -> Option<(usize, usize, f64)> {
            let from = fields.next()?.parse().ok()?;
            let to = fields.next()?.parse().ok()?;
            let weight = fields.next()?.parse().ok()?;
            Some((from, to, weight))
        })();
        let Some((from, to, weight)) = edge else {
            bail!("malformed edge on line {}: {line:?}", number + 2);
        };
        if !graph.add_edge(from, to, OrderedFloat(weight)) {
            bail!("invalid edge on line {}: {line:?}", number + 2);
        }
    }

    Ok(graph)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.no_log {
        logger.filter_level(log::LevelFilter::Off);
    }
    logger.init();

    let algorithm = Algorithm::parse(&cli.algorithm)?;
    let text = fs::read_to_string(&cli.graph)
        .with_context(|| format!("reading {}", cli.graph.display()))?;
    let graph = parse_graph(&text)?;

    let start = std::time::Instant::now();
    let result = algorithm.run(&graph, cli.source)?;
    let elapsed = start.elapsed();

    if let Some(out_path) = cli.out {
        let mut file = fs::File::create(&out_path)
            .with_context(|| format!("creating {}", out_path.display()))?;
        for (vertex, distance) in result.distances.iter().enumerate() {
            match distance {
                Some(d) => writeln!(file, "{vertex} {:.6}", d.into_inner())?,
                None => writeln!(file, "{vertex} inf")?,
            }
        }
        println!(
            "Wrote {} distances to {}",
            result.distances.len(),
            out_path.display()
        );
    } else {
        let reachable = result.distances.iter().flatten().count();
        let max_finite = result.distances.iter().flatten().max();
        println!("Vertices: {}", result.distances.len());
        println!("Reachable from {}: {reachable}", cli.source);
        if let Some(max) = max_finite {
            println!("Max finite distance: {:.6}", max.into_inner());
        }
    }
    println!("Elapsed: {:.3} s", elapsed.as_secs_f64());

    Ok(())
}
