use thiserror::Error;

/// Errors returned by [`WeightedGraph`](crate::WeightedGraph) operations.
///
/// The offending vertex is not carried in the error so that vertex types
/// need not implement `Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// `add_vertex` was called with a vertex that is already present.
    #[error("vertex is already present in the graph")]
    DuplicateVertex,

    /// `add_edge` was called with a negative weight.
    #[error("invalid edge weight {weight}: weights must be non-negative")]
    InvalidWeight { weight: i32 },

    /// An endpoint or search terminal is not a vertex of the graph.
    #[error("vertex is not present in the graph")]
    UnknownVertex,

    /// Dijkstra finished without finding any path to the end vertex.
    #[error("end vertex is unreachable from the start vertex")]
    UnreachableEnd,
}
