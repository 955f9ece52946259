//! Tests for graph error types.

use crate::error::Error;
use crate::graph::{bfs, Graph, Orientation};

#[test]
fn test_error_display() {
    let err = Error::VertexNotFound("\"Juigalpa\"".to_string());
    assert_eq!(err.to_string(), "Vertex not found: \"Juigalpa\"");
}

#[test]
fn test_traversal_error_names_missing_vertex() {
    let mut graph = Graph::new(Orientation::Undirected);
    graph.add_edge("A", "B");

    let err = bfs(&graph, &"Z").unwrap_err();
    assert!(matches!(err, Error::VertexNotFound(_)));
    assert!(err.to_string().contains('Z'));
}
