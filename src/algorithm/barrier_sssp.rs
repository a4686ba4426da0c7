use log::debug;
use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::bmssp::Bmssp;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// The deterministic O(m log^(2/3) n) single-source shortest path solver.
///
/// Validates the input, derives the recursion parameters from the vertex
/// count and runs the bounded multi-source search from the top level with an
/// unbounded interval.
#[derive(Debug, Default)]
pub struct BarrierSSSP;

impl BarrierSSSP {
    /// Creates a new solver instance
    pub fn new() -> Self {
        BarrierSSSP
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BarrierSSSP
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "BMSSP"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        for u in 0..n {
            for (v, weight) in graph.outgoing_edges(u) {
                if weight < W::zero() {
                    return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
                }
                if v >= n {
                    return Err(Error::InvalidEdge(u, v));
                }
            }
        }

        if n == 1 {
            return Ok(ShortestPathResult {
                distances: vec![Some(W::zero())],
                source,
            });
        }

        debug!(
            "solving sssp over {n} vertices, {} edges from source {source}",
            graph.edge_count()
        );
        let mut engine = Bmssp::new(graph, source);
        engine.solve();

        Ok(ShortestPathResult {
            distances: (0..n).map(|v| engine.distance(v)).collect(),
            source,
        })
    }
}
