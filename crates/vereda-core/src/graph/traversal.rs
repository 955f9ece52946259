//! Graph traversal algorithms (BFS/DFS) and connectivity.
//!
//! Provides generic traversal via the [`Adjacency`] trait, enabling any
//! graph store with ordered neighbor lists to support BFS and DFS without
//! reimplementation. Visitation order is fully determined by the store's
//! insertion order, so repeated runs over the same graph are identical.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::error::{Error, Result};

use super::store::{Graph, VertexId};

/// Trait for graph traversal - any graph store can implement this.
///
/// Neighbor and vertex enumerations must be stable across calls; traversal
/// output order is defined in terms of them.
pub trait Adjacency {
    /// Vertex identifier type.
    type Vertex: VertexId;

    /// Returns true if the vertex exists in the store.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Returns the ordered neighbor identifiers of a vertex.
    fn neighbor_ids(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex>;

    /// Returns all vertex identifiers in first-insertion order.
    fn vertex_ids(&self) -> Vec<Self::Vertex>;
}

/// Implement `Adjacency` for `Graph`.
impl<V: VertexId> Adjacency for Graph<V> {
    type Vertex = V;

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.has_vertex(vertex)
    }

    fn neighbor_ids(&self, vertex: &V) -> Vec<V> {
        self.neighbors(vertex)
    }

    fn vertex_ids(&self) -> Vec<V> {
        self.vertices().cloned().collect()
    }
}

/// Breadth-first traversal from a start vertex.
///
/// Visits every vertex reachable from `start`, layer by layer, and returns
/// the visitation order. Within a layer, neighbors are reported in the
/// order their edges were inserted. Each vertex is marked visited when it
/// is enqueued, so a vertex reachable through several same-layer paths is
/// still reported once.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`] if `start` is not in the graph.
pub fn bfs<G: Adjacency>(graph: &G, start: &G::Vertex) -> Result<Vec<G::Vertex>> {
    if !graph.contains_vertex(start) {
        return Err(Error::VertexNotFound(format!("{start:?}")));
    }

    let mut order = Vec::new();
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());
        for neighbor in graph.neighbor_ids(&current) {
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(visited = order.len(), "bfs complete");
    Ok(order)
}

/// Depth-first traversal from a start vertex.
///
/// Iterative, stack-based: neighbors are pushed in reverse insertion order
/// so that popping explores them in forward insertion order, matching the
/// recursive formulation. A vertex may sit on the stack more than once;
/// only its first pop is reported.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`] if `start` is not in the graph.
pub fn dfs<G: Adjacency>(graph: &G, start: &G::Vertex) -> Result<Vec<G::Vertex>> {
    if !graph.contains_vertex(start) {
        return Err(Error::VertexNotFound(format!("{start:?}")));
    }

    let mut order = Vec::new();
    let mut visited = FxHashSet::default();
    let mut stack = vec![start.clone()];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        let neighbors = graph.neighbor_ids(&current);
        order.push(current);
        for neighbor in neighbors.into_iter().rev() {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    tracing::debug!(visited = order.len(), "dfs complete");
    Ok(order)
}

/// Returns true if every vertex is reachable from the first-inserted vertex.
///
/// Empty and single-vertex graphs are connected by definition. For directed
/// graphs this checks one-sided reachability from the first-inserted vertex
/// only, not strong connectivity: a graph where every vertex can be reached
/// from the root but not vice versa still reports `true`.
#[must_use]
pub fn is_connected<G: Adjacency>(graph: &G) -> bool {
    let ids = graph.vertex_ids();
    if ids.len() <= 1 {
        return true;
    }

    match bfs(graph, &ids[0]) {
        Ok(order) => order.len() == ids.len(),
        Err(_) => false,
    }
}
