use crate::graph::traits::Graph;
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph over dense vertex indices `0..n`, stored as adjacency
/// lists of `(target, weight)` pairs. Parallel edges are allowed.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex
    adjacency: Vec<Vec<(usize, W)>>,

    /// Total number of directed edges
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a graph with `vertices` vertices and no edges
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph from an edge list. Edges with out-of-range endpoints or
    /// negative weights are rejected by `add_edge` and skipped.
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, W)]) -> Self {
        let mut graph = Self::with_vertices(vertices);
        for &(from, to, weight) in edges {
            let added = graph.add_edge(from, to, weight);
            debug_assert!(added, "edge ({from}, {to}) rejected");
        }
        graph
    }

    /// Adds a vertex to the graph and returns its ID
    pub fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Adds a directed edge between existing vertices with a non-negative
    /// weight. Returns false when the edge is invalid.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || weight < W::zero() {
            return false;
        }
        self.adjacency[from].push((to, weight));
        self.edge_count += 1;
        true
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.adjacency.len()
    }
}
