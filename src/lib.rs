//! Single-source shortest paths below the sorting barrier.
//!
//! This library implements the deterministic O(m log^(2/3) n) algorithm of
//! Duan, Mao, Mao, Shu and Yin ("Breaking the Sorting Barrier for Directed
//! Single-Source Shortest Paths", 2025) for directed graphs with real
//! non-negative edge weights.
//!
//! The solver combines bounded multi-source relaxation with a partial-sort
//! container that never orders the frontier globally: each recursion level
//! pulls a block of near-minimum vertices, completes them under a tighter
//! bound, and feeds freshly relaxed vertices back without a full sort.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    barrier_sssp::BarrierSSSP, dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Source vertex not found in graph")]
    SourceNotFound,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
