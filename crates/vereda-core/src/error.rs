//! Error types for vereda-core.

use thiserror::Error;

/// Graph operation error types.
#[derive(Error, Debug)]
pub enum Error {
    /// A traversal was started from a vertex that is not in the graph.
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
