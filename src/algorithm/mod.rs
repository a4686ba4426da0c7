pub mod barrier_sssp;
pub mod bmssp;
pub mod dijkstra;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
