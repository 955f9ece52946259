//! Property-based tests for graph traversal and path queries.
//!
//! Each property checks the traversal engine against a deliberately
//! naive reference written with repeated scans instead of a queue, so
//! the two implementations share no code paths.

use proptest::prelude::*;
use proptest::test_runner::FileFailurePersistence;
use std::collections::HashSet;
use vereda_core::{bfs, dfs, find_path, is_connected, Graph, Orientation};

/// Custom proptest config with failure persistence in the source dir.
fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        failure_persistence: Some(Box::new(FileFailurePersistence::WithSource(
            "traversal-regressions",
        ))),
        ..ProptestConfig::default()
    }
}

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Undirected), Just(Orientation::Directed)]
}

/// Strategy for small graphs over `u8` vertex ids. Edge endpoints may
/// name vertices outside the seeded set, which exercises the implicit
/// vertex creation in `add_edge`.
fn graph_strategy() -> impl Strategy<Value = Graph<u8>> {
    (
        orientation_strategy(),
        prop::collection::vec(0u8..16, 1..=8),
        prop::collection::vec((0u8..16, 0u8..16), 0..24),
    )
        .prop_map(|(orientation, vertices, edges)| {
            let mut graph = Graph::new(orientation);
            for vertex in vertices {
                graph.add_vertex(vertex);
            }
            for (from, to) in edges {
                graph.add_edge(from, to);
            }
            graph
        })
}

/// Reference reachability: grow a set to a fixed point by rescanning
/// the neighbors of every member on every pass.
fn reference_reachable(graph: &Graph<u8>, start: u8) -> HashSet<u8> {
    let mut reachable = HashSet::new();
    reachable.insert(start);
    loop {
        let mut grew = false;
        for vertex in reachable.clone() {
            for neighbor in graph.neighbors(&vertex) {
                grew |= reachable.insert(neighbor);
            }
        }
        if !grew {
            return reachable;
        }
    }
}

/// Reference hop distance: expand one whole frontier layer at a time.
fn reference_distance(graph: &Graph<u8>, start: u8, end: u8) -> Option<usize> {
    let mut seen = HashSet::new();
    seen.insert(start);
    let mut frontier = vec![start];
    let mut hops = 0;
    while !frontier.is_empty() {
        if frontier.contains(&end) {
            return Some(hops);
        }
        let mut next = Vec::new();
        for vertex in frontier {
            for neighbor in graph.neighbors(&vertex) {
                if seen.insert(neighbor) {
                    next.push(neighbor);
                }
            }
        }
        frontier = next;
        hops += 1;
    }
    None
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn test_bfs_visits_exactly_the_reachable_set(
        graph in graph_strategy(),
        start in 0u8..16,
    ) {
        if graph.has_vertex(&start) {
            let order = bfs(&graph, &start).unwrap();
            prop_assert_eq!(order[0], start);

            let unique: HashSet<u8> = order.iter().copied().collect();
            prop_assert_eq!(unique.len(), order.len());
            prop_assert_eq!(unique, reference_reachable(&graph, start));
        } else {
            prop_assert!(bfs(&graph, &start).is_err());
        }
    }

    #[test]
    fn test_dfs_visits_the_same_set_as_bfs(
        graph in graph_strategy(),
        start in 0u8..16,
    ) {
        if graph.has_vertex(&start) {
            let depth_order = dfs(&graph, &start).unwrap();
            prop_assert_eq!(depth_order[0], start);

            let unique: HashSet<u8> = depth_order.iter().copied().collect();
            prop_assert_eq!(unique.len(), depth_order.len());

            let breadth: HashSet<u8> =
                bfs(&graph, &start).unwrap().into_iter().collect();
            prop_assert_eq!(unique, breadth);
        } else {
            prop_assert!(dfs(&graph, &start).is_err());
        }
    }

    #[test]
    fn test_find_path_is_a_shortest_simple_walk(
        graph in graph_strategy(),
        start in 0u8..16,
        end in 0u8..16,
    ) {
        let path = find_path(&graph, &start, &end);
        if graph.has_vertex(&start) && graph.has_vertex(&end) {
            match reference_distance(&graph, start, end) {
                Some(hops) => {
                    prop_assert_eq!(path.len(), hops + 1);
                    prop_assert_eq!(path[0], start);
                    prop_assert_eq!(*path.last().unwrap(), end);

                    let unique: HashSet<u8> = path.iter().copied().collect();
                    prop_assert_eq!(unique.len(), path.len());

                    for pair in path.windows(2) {
                        prop_assert!(graph.has_edge(&pair[0], &pair[1]));
                    }
                }
                None => prop_assert!(path.is_empty()),
            }
        } else {
            prop_assert!(path.is_empty());
        }
    }

    #[test]
    fn test_is_connected_matches_reachable_count(graph in graph_strategy()) {
        let expected = match graph.vertices().next().copied() {
            None => true,
            Some(root) => {
                reference_reachable(&graph, root).len() == graph.vertex_count()
            }
        };
        prop_assert_eq!(is_connected(&graph), expected);
    }

    #[test]
    fn test_every_listed_edge_is_queryable(graph in graph_strategy()) {
        for (from, to, _) in graph.edges() {
            prop_assert!(graph.has_vertex(from));
            prop_assert!(graph.has_vertex(to));
            prop_assert!(graph.has_edge(from, to));
            if !graph.is_directed() {
                prop_assert!(graph.has_edge(to, from));
            }
        }
    }
}
