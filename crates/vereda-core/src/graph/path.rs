//! Shortest-path reconstruction over unweighted graphs.
//!
//! Runs a breadth-first search that records each newly discovered vertex's
//! predecessor, then rebuilds the route by walking those parent links
//! backward from the target. Edge weights are ignored; "shortest" means
//! fewest edges.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use super::store::VertexId;
use super::traversal::Adjacency;

/// Finds a shortest path (by edge count) from `start` to `end`.
///
/// Returns the full vertex sequence including both endpoints. The result is
/// a simple path, and ties between equally short routes are broken by edge
/// insertion order. Missing endpoints and unreachable targets yield an
/// empty vector rather than an error; `find_path(g, a, a)` is `[a]` for any
/// present vertex `a`.
#[must_use]
pub fn find_path<G: Adjacency>(
    graph: &G,
    start: &G::Vertex,
    end: &G::Vertex,
) -> Vec<G::Vertex> {
    if !graph.contains_vertex(start) || !graph.contains_vertex(end) {
        return Vec::new();
    }
    if start == end {
        return vec![start.clone()];
    }

    let mut visited = FxHashSet::default();
    let mut parents: FxHashMap<G::Vertex, G::Vertex> = FxHashMap::default();
    let mut queue = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        // Detected at dequeue time; the first dequeue of `end` is on the
        // shallowest layer that contains it.
        if current == *end {
            let path = reconstruct(&parents, &current);
            tracing::debug!(hops = path.len() - 1, "path found");
            return path;
        }
        for neighbor in graph.neighbor_ids(&current) {
            if visited.insert(neighbor.clone()) {
                parents.insert(neighbor.clone(), current.clone());
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!("no path");
    Vec::new()
}

/// Walks parent links from the target back to the root, then reverses.
///
/// The root has no parent entry, which terminates the walk.
fn reconstruct<V: VertexId>(parents: &FxHashMap<V, V>, end: &V) -> Vec<V> {
    let mut path = Vec::new();
    let mut current = Some(end);
    while let Some(vertex) = current {
        path.push(vertex.clone());
        current = parents.get(vertex);
    }
    path.reverse();
    path
}
