//! Error types for graph construction and queries.

use std::fmt;

/// Errors surfaced by graph operations and the algorithms running over them.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphError {
    /// A vertex index outside `[0, vertex_count)` was supplied.
    InvalidVertex { vertex: usize, vertex_count: usize },

    /// An edge from a vertex to itself was rejected.
    SelfLoop { vertex: usize },

    /// An edge weight was negative or not a finite number.
    NegativeWeight { weight: f64 },

    /// An edge between the given pair already exists.
    DuplicateEdge { source: usize, target: usize },

    /// A predecessor chain failed to terminate at the expected source.
    ///
    /// This indicates corrupted shortest-path state and is never produced by
    /// an unmodified [`ShortestPaths`](crate::shortest::ShortestPaths).
    InconsistentPredecessors { vertex: usize },
}

// Hand-written instead of `#[derive(thiserror::Error)]`: thiserror treats any
// field named `source` as the error source, but `DuplicateEdge::source` is a
// vertex index mandated by the spec, not a nested error.
impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidVertex {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex {vertex} is out of range for a graph with {vertex_count} vertices"
            ),
            GraphError::SelfLoop { vertex } => write!(f, "self-loop on vertex {vertex}"),
            GraphError::NegativeWeight { weight } => {
                write!(f, "edge weight {weight} is negative or not finite")
            }
            GraphError::DuplicateEdge { source, target } => {
                write!(f, "an edge between {source} and {target} already exists")
            }
            GraphError::InconsistentPredecessors { vertex } => write!(
                f,
                "predecessor chain starting at vertex {vertex} does not terminate at the source"
            ),
        }
    }
}

impl std::error::Error for GraphError {}
