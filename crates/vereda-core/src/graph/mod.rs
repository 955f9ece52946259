//! In-memory graph module with deterministic iteration order.
//!
//! Provides the adjacency-list store, traversal algorithms and shortest-path
//! reconstruction. Every operation that reports vertices does so in an order
//! fully determined by the sequence of insertions, which makes traversal
//! output reproducible and testable.
//!
//! # Example
//!
//! ```rust
//! use vereda_core::graph::{bfs, find_path, Graph, Orientation};
//!
//! let mut graph = Graph::new(Orientation::Undirected);
//! graph.add_edge("A", "B");
//! graph.add_edge("B", "C");
//!
//! let order = bfs(&graph, &"A").unwrap();
//! assert_eq!(order, vec!["A", "B", "C"]);
//! assert_eq!(find_path(&graph, &"A", &"C"), vec!["A", "B", "C"]);
//! ```

mod path;
mod store;
pub mod traversal;

#[cfg(test)]
mod path_tests;

pub use path::find_path;
pub use store::{Graph, Orientation, VertexId};
pub use traversal::{bfs, dfs, is_connected, Adjacency};
