//! Tests for shortest-path queries.

use super::path::find_path;
use super::store::{Graph, Orientation};

/// Build an undirected graph with an isolated vertex F:
/// A-B, A-C, B-D, B-E, C-D, D-E, plus F with no edges.
fn build_campus_graph() -> Graph<&'static str> {
    let mut graph = Graph::new(Orientation::Undirected);
    for vertex in ["A", "B", "C", "D", "E", "F"] {
        graph.add_vertex(vertex);
    }
    for (from, to) in [
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("B", "E"),
        ("C", "D"),
        ("D", "E"),
    ] {
        graph.add_edge(from, to);
    }
    graph
}

/// Build a connected undirected road map:
/// Managua-Masaya, Managua-León, Masaya-Granada, Granada-Rivas, Managua-Granada
fn build_road_graph() -> Graph<&'static str> {
    let mut graph = Graph::new(Orientation::Undirected);
    graph.add_edge("Managua", "Masaya");
    graph.add_edge("Managua", "León");
    graph.add_edge("Masaya", "Granada");
    graph.add_edge("Granada", "Rivas");
    graph.add_edge("Managua", "Granada");
    graph
}

/// Build a directed graph with a long and a short branch:
/// S → A → B → C → T, plus S → D → T
fn build_branch_graph() -> Graph<&'static str> {
    let mut graph = Graph::new(Orientation::Directed);
    graph.add_edge("S", "A");
    graph.add_edge("A", "B");
    graph.add_edge("B", "C");
    graph.add_edge("C", "T");
    graph.add_edge("S", "D");
    graph.add_edge("D", "T");
    graph
}

// ── Path Tests ─────────────────────────────────────────────────────

#[test]
fn test_find_path_direct_edge() {
    let mut graph = Graph::new(Orientation::Undirected);
    graph.add_edge("A", "B");
    assert_eq!(find_path(&graph, &"A", &"B"), vec!["A", "B"]);
}

#[test]
fn test_find_path_fewest_hops() {
    // A-B-E has two hops; every other route to E has at least three.
    let graph = build_campus_graph();
    assert_eq!(find_path(&graph, &"A", &"E"), vec!["A", "B", "E"]);
}

#[test]
fn test_find_path_shortcut_over_long_route() {
    let graph = build_road_graph();
    assert_eq!(
        find_path(&graph, &"Managua", &"Rivas"),
        vec!["Managua", "Granada", "Rivas"]
    );
}

#[test]
fn test_find_path_same_start_and_end() {
    let graph = build_campus_graph();
    assert_eq!(find_path(&graph, &"F", &"F"), vec!["F"]);
}

#[test]
fn test_find_path_missing_start_is_empty() {
    let graph = build_campus_graph();
    assert!(find_path(&graph, &"Z", &"A").is_empty());
}

#[test]
fn test_find_path_missing_end_is_empty() {
    let graph = build_campus_graph();
    assert!(find_path(&graph, &"A", &"Z").is_empty());
}

#[test]
fn test_find_path_unreachable_is_empty() {
    let graph = build_campus_graph();
    assert!(find_path(&graph, &"A", &"F").is_empty());
}

#[test]
fn test_find_path_directed_takes_short_branch() {
    let graph = build_branch_graph();
    assert_eq!(find_path(&graph, &"S", &"T"), vec!["S", "D", "T"]);
}

#[test]
fn test_find_path_directed_respects_arrows() {
    // Every edge points away from S, so nothing leads back to it.
    let graph = build_branch_graph();
    assert!(find_path(&graph, &"T", &"S").is_empty());
}

#[test]
fn test_find_path_simple_despite_cycle() {
    let mut graph = Graph::new(Orientation::Directed);
    graph.add_edge(1, 2);
    graph.add_edge(2, 3);
    graph.add_edge(3, 1);
    assert_eq!(find_path(&graph, &1, &3), vec![1, 2, 3]);
}

#[test]
fn test_find_path_tie_breaks_on_insertion_order() {
    // A-B-D and A-C-D are both two hops; the branch through the
    // first-inserted neighbor wins.
    let mut graph = Graph::new(Orientation::Undirected);
    graph.add_edge("A", "B");
    graph.add_edge("A", "C");
    graph.add_edge("B", "D");
    graph.add_edge("C", "D");
    assert_eq!(find_path(&graph, &"A", &"D"), vec!["A", "B", "D"]);
}

#[test]
fn test_find_path_ignores_weights() {
    // One heavy hop still beats two light ones.
    let mut graph = Graph::new(Orientation::Undirected);
    graph.add_edge_weighted("A", "B", 10.0);
    graph.add_edge_weighted("A", "C", 1.0);
    graph.add_edge_weighted("C", "B", 1.0);
    assert_eq!(find_path(&graph, &"A", &"B"), vec!["A", "B"]);
}

#[test]
fn test_find_path_self_loop_is_skipped() {
    let mut graph = Graph::new(Orientation::Undirected);
    graph.add_edge("A", "A");
    graph.add_edge("A", "B");
    assert_eq!(find_path(&graph, &"A", &"B"), vec!["A", "B"]);
}
