//! # Vereda Core
//!
//! Deterministic in-memory graphs with BFS/DFS traversal, connectivity and
//! shortest-path queries.
//!
//! Vereda keeps both the vertex set and every neighbor list in insertion
//! order, so traversal output is reproducible run after run and ties between
//! equally short paths are always broken the same way. Graphs are directed
//! or undirected, vertices are any `Clone + Eq + Hash + Debug` type, and
//! edges carry an optional weight that is stored but never read by the
//! algorithms (all traversal is unweighted).
//!
//! ## Features
//!
//! - **Ordered adjacency**: insertion order defines traversal order
//! - **BFS / DFS**: iterative, cycle-safe, identical order across runs
//! - **Connectivity**: reachability check from the first-inserted vertex
//! - **Shortest paths**: fewest-edges routes via parent-pointer BFS
//!
//! ## Quick Start
//!
//! ```rust
//! use vereda_core::{bfs, find_path, is_connected, Graph, Orientation};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut graph = Graph::new(Orientation::Undirected);
//!     graph.add_edge("Managua", "Masaya");
//!     graph.add_edge("Managua", "León");
//!     graph.add_edge("Masaya", "Granada");
//!
//!     // Traversal order follows edge insertion order.
//!     let order = bfs(&graph, &"Managua")?;
//!     assert_eq!(order, vec!["Managua", "Masaya", "León", "Granada"]);
//!
//!     // Shortest route by edge count, endpoints included.
//!     let route = find_path(&graph, &"León", &"Granada");
//!     assert_eq!(route, vec!["León", "Managua", "Masaya", "Granada"]);
//!
//!     assert!(is_connected(&graph));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{bfs, dfs, find_path, is_connected, Adjacency, Graph, Orientation, VertexId};
