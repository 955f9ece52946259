//! Fuzz target for graph construction and traversal.
//!
//! This target applies arbitrary operation sequences to a graph to find:
//! - Panics during insertion, traversal or path reconstruction
//! - Traversal results that repeat or miss vertices
//! - Reconstructed paths that are not real walks through the graph
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_graph_ops
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use vereda_core::{bfs, dfs, find_path, is_connected, Graph, Orientation};

/// One graph operation to apply or query to run.
#[derive(Arbitrary, Debug)]
enum GraphOp {
    AddVertex(u8),
    AddEdge(u8, u8),
    AddEdgeWeighted(u8, u8, f64),
    Neighbors(u8),
    HasEdge(u8, u8),
    Bfs(u8),
    Dfs(u8),
    FindPath(u8, u8),
    IsConnected,
}

/// Fuzzing input: graph orientation plus an operation sequence.
#[derive(Arbitrary, Debug)]
struct OpSequence {
    directed: bool,
    ops: Vec<GraphOp>,
}

fuzz_target!(|input: OpSequence| {
    // Limit sequence length to keep iterations fast
    let max_ops = 512;

    let orientation = if input.directed {
        Orientation::Directed
    } else {
        Orientation::Undirected
    };
    let mut graph = Graph::new(orientation);

    for op in input.ops.into_iter().take(max_ops) {
        match op {
            GraphOp::AddVertex(v) => {
                graph.add_vertex(v);
                assert!(graph.has_vertex(&v));
            }
            GraphOp::AddEdge(from, to) => {
                graph.add_edge(from, to);
                assert!(graph.has_edge(&from, &to));
            }
            GraphOp::AddEdgeWeighted(from, to, weight) => {
                graph.add_edge_weighted(from, to, weight);
                assert!(graph.has_edge(&from, &to));
            }
            GraphOp::Neighbors(v) => {
                // Every reported neighbor is a real vertex
                for neighbor in graph.neighbors(&v) {
                    assert!(graph.has_vertex(&neighbor));
                }
            }
            GraphOp::HasEdge(from, to) => {
                let _ = graph.has_edge(&from, &to);
            }
            GraphOp::Bfs(start) => check_traversal(bfs(&graph, &start), &graph, start),
            GraphOp::Dfs(start) => check_traversal(dfs(&graph, &start), &graph, start),
            GraphOp::FindPath(start, end) => {
                let path = find_path(&graph, &start, &end);
                if let (Some(first), Some(last)) = (path.first(), path.last()) {
                    assert_eq!(*first, start);
                    assert_eq!(*last, end);
                    for pair in path.windows(2) {
                        assert!(graph.has_edge(&pair[0], &pair[1]));
                    }
                    // Parent-map entries are set once, so the path is simple
                    let unique: HashSet<u8> = path.iter().copied().collect();
                    assert_eq!(unique.len(), path.len());
                }
            }
            GraphOp::IsConnected => {
                let _ = is_connected(&graph);
            }
        }
    }
});

/// A traversal either errors on a missing start or reports each reachable
/// vertex exactly once, starting with the start vertex.
fn check_traversal(result: vereda_core::Result<Vec<u8>>, graph: &Graph<u8>, start: u8) {
    match result {
        Ok(order) => {
            assert!(graph.has_vertex(&start));
            assert_eq!(order[0], start);
            let unique: HashSet<u8> = order.iter().copied().collect();
            assert_eq!(unique.len(), order.len());
            assert!(order.len() <= graph.vertex_count());
        }
        Err(_) => assert!(!graph.has_vertex(&start)),
    }
}
