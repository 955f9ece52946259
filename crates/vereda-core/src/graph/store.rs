//! Adjacency-list graph store with deterministic iteration order.
//!
//! Vertices and per-vertex neighbor lists both keep insertion order, so
//! every traversal over the same construction sequence reports the same
//! visitation order. Weights are stored with each edge but no algorithm
//! in this crate reads them.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Marker trait for vertex identifiers.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Debug` type, so
/// string, integer and char identifiers all qualify without opt-in.
pub trait VertexId: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> VertexId for T {}

/// Whether edges are one-way or mirrored.
///
/// Fixed at construction time and never changes for the lifetime of a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Edges run only from source to target.
    Directed,
    /// Every edge is mirrored so both endpoints see each other.
    #[default]
    Undirected,
}

impl Orientation {
    /// Returns true for [`Orientation::Directed`].
    #[must_use]
    pub fn is_directed(self) -> bool {
        matches!(self, Orientation::Directed)
    }
}

/// In-memory adjacency-list graph with insertion-ordered vertices and edges.
///
/// Provides O(1) average vertex lookup and O(degree) neighbor access. The
/// vertex set iterates in first-insertion order and each neighbor list keeps
/// edge-insertion order; both orders are observable through traversal
/// results, so they are part of the API contract rather than an accident of
/// the backing map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "V: Serialize + Eq + Hash",
    deserialize = "V: Deserialize<'de> + Eq + Hash"
))]
pub struct Graph<V> {
    /// Edge orientation, fixed at construction.
    orientation: Orientation,
    /// Vertex -> ordered `(neighbor, weight)` entries.
    adjacency: IndexMap<V, Vec<(V, f64)>>,
}

/// Order-sensitive equality: iteration order is observable through
/// traversal, so two graphs with the same edges in a different insertion
/// order are not equal.
impl<V: VertexId> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.orientation == other.orientation
            && self.adjacency.iter().eq(other.adjacency.iter())
    }
}

/// An empty undirected graph, matching the constructor default.
impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            adjacency: IndexMap::new(),
        }
    }
}

impl<V: VertexId> Graph<V> {
    /// Creates an empty graph with the given orientation.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            adjacency: IndexMap::new(),
        }
    }

    /// Creates an empty graph with pre-allocated room for `vertices` vertices.
    #[must_use]
    pub fn with_capacity(orientation: Orientation, vertices: usize) -> Self {
        Self {
            orientation,
            adjacency: IndexMap::with_capacity(vertices),
        }
    }

    /// Returns the graph's orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns true if edges are one-way.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.orientation.is_directed()
    }

    // ── Vertex operations ──────────────────────────────────────────────

    /// Adds a vertex with an empty neighbor list.
    ///
    /// Returns `true` if the vertex was inserted, `false` if it already
    /// existed. Re-adding an existing vertex never touches its neighbors.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Returns true if the vertex exists.
    #[must_use]
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns the total number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterates over vertices in first-insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    // ── Edge operations ────────────────────────────────────────────────

    /// Adds an edge with the default weight of `1.0`.
    ///
    /// See [`Graph::add_edge_weighted`] for the full behavior.
    pub fn add_edge(&mut self, from: V, to: V) {
        self.add_edge_weighted(from, to, 1.0);
    }

    /// Adds a weighted edge, inserting missing endpoints on the fly.
    ///
    /// Appends `(to, weight)` to `from`'s neighbor list; for undirected
    /// graphs the mirror entry `(from, weight)` is appended to `to`'s list
    /// as well. A self-loop produces exactly one entry regardless of
    /// orientation. Parallel edges between the same pair are kept, in
    /// insertion order; deduplication is the caller's responsibility.
    pub fn add_edge_weighted(&mut self, from: V, to: V, weight: f64) {
        tracing::trace!(from = ?from, to = ?to, weight, "add edge");
        let mirror = !self.orientation.is_directed() && from != to;

        self.adjacency
            .entry(from.clone())
            .or_default()
            .push((to.clone(), weight));

        let reverse = self.adjacency.entry(to).or_default();
        if mirror {
            reverse.push((from, weight));
        }
    }

    /// Returns the ordered neighbor identifiers of a vertex.
    ///
    /// Weights are stripped. A vertex that does not exist has no neighbors,
    /// so the result is empty rather than an error.
    #[must_use]
    pub fn neighbors(&self, vertex: &V) -> Vec<V> {
        self.adjacency
            .get(vertex)
            .map(|entries| entries.iter().map(|(to, _)| to.clone()).collect())
            .unwrap_or_default()
    }

    /// Returns the ordered `(neighbor, weight)` entries of a vertex.
    ///
    /// Empty slice if the vertex does not exist.
    #[must_use]
    pub fn neighbor_entries(&self, vertex: &V) -> &[(V, f64)] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Returns true if `to` appears among `from`'s neighbors.
    ///
    /// A missing `from` vertex yields `false`, not an error.
    #[must_use]
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|entries| entries.iter().any(|(target, _)| target == to))
    }

    /// Returns the number of stored neighbor entries of a vertex.
    ///
    /// For directed graphs this is the out-degree.
    #[must_use]
    pub fn degree(&self, vertex: &V) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }

    /// Returns the number of logical edges.
    ///
    /// An undirected edge counts once even though it is stored from both
    /// endpoints; parallel edges count individually.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Iterates over `(from, to, weight)` triples in deterministic order.
    ///
    /// Directed graphs report every stored entry. Undirected graphs report
    /// each logical edge once, oriented from the earlier-inserted endpoint.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, f64)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(index, (from, entries))| {
                entries
                    .iter()
                    .filter(move |(to, _)| {
                        self.orientation.is_directed()
                            || self.adjacency.get_index_of(to).is_none_or(|t| t >= index)
                    })
                    .map(move |(to, weight)| (from, to, *weight))
            })
    }
}
