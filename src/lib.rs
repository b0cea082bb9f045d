//! Single-source shortest paths on edge-weighted digraphs.
//!
//! This library implements Dijkstra's algorithm driven by an index-keyed
//! binary heap. The combination of an adjacency-list digraph with O(1)
//! incident-edge access ([`EdgeWeightedDigraph`]) and a priority queue with
//! O(log n) decrease-key ([`IndexMinPQ`]) yields the classic O(E log V)
//! bound on digraphs with non-negative edge weights.
//!
//! The shortest-path tree is computed once by [`DijkstraSP::new`] and queried
//! afterwards through `dist_to`, `has_path_to` and `path_to`.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::dijkstra::DijkstraSP;
pub use data_structures::IndexMinPQ;
/// Re-export main types for convenient use
pub use graph::digraph::EdgeWeightedDigraph;
pub use graph::edge::DirectedEdge;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid priority queue index: {0}")]
    InvalidIndex(usize),

    #[error("Index {0} is already in the priority queue")]
    DuplicateIndex(usize),

    #[error("Index {0} is not in the priority queue")]
    MissingIndex(usize),

    #[error("New key for index {0} is not strictly smaller than its current key")]
    KeyNotDecreased(usize),

    #[error("Priority queue underflow")]
    EmptyQueue,

    #[error("Negative weight on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Invalid graph input: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
