use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::AddressableHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over the addressable heap. Serves as the
/// reference oracle for the sub-sorting solver and as the CLI fallback.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        distances[source] = Some(W::zero());

        let mut heap = AddressableHeap::new(n);
        heap.insert(source, W::zero());

        while let Some((u, dist_u)) = heap.extract_min() {
            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u + weight;
                let improves = distances[v].is_none_or(|current| candidate < current);
                if improves {
                    distances[v] = Some(candidate);
                    if heap.contains(v) {
                        heap.decrease_key(v, candidate);
                    } else {
                        heap.insert(v, candidate);
                    }
                }
            }
        }

        Ok(ShortestPathResult { distances, source })
    }
}
