use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Trait representing a weighted directed graph
///
/// The shortest-path algorithms only ever read a graph through this oracle:
/// a dense vertex count and per-vertex outgoing adjacency.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over `(target, weight)` pairs leaving `vertex`
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;
}
