//! Undirected unweighted graph backed by an adjacency list over labels.

use std::{fmt, hash::Hash, iter, slice};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    algo::{components, cycle},
    core::{marker::Direction, AddEdgeError, AddEdgeErrorKind, GraphBase, Neighbors, VertexSet},
    visit::raw::{RawBfs, RawDfs, RawVisit},
};

/// Undirected graph whose vertices are arbitrary labels.
///
/// Each vertex owns the list of its neighbors; an edge is represented
/// symmetrically by both endpoints listing each other. Neighbor lists keep
/// insertion order and never contain duplicates or the vertex itself.
/// Vertices iterate in insertion order.
///
/// Mutation with invalid arguments (self-loop, duplicate edge, absent
/// vertex) is a silent no-op; [`try_add_edge`](Self::try_add_edge) reports
/// the cause of a rejection instead.
///
/// # Examples
///
/// ```
/// use simurg::graph::UnGraph;
///
/// let mut graph = UnGraph::new();
///
/// // Endpoints are created on demand.
/// graph.add_edge("brno", "prague");
/// graph.add_edge("prague", "ostrava");
///
/// assert!(graph.is_valid_path(&["brno", "prague", "ostrava"]));
/// assert_eq!(graph.count_components(), 1);
/// assert!(!graph.has_cycle());
/// ```
#[derive(Debug, Clone)]
pub struct UnGraph<V> {
    adj: FxHashMap<V, Vec<V>>,
    // Insertion order of the vertices, kept in sync with `adj` keys.
    order: Vec<V>,
}

impl<V> UnGraph<V> {
    pub fn new() -> Self {
        Self {
            adj: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        // Every edge is listed by both endpoints.
        self.adj.values().map(Vec::len).sum::<usize>() / 2
    }
}

impl<V> UnGraph<V>
where
    V: Clone + Eq + Hash,
{
    /// Builds a graph from `(u, v)` pairs under the
    /// [`add_edge`](Self::add_edge) rules: endpoints are created on demand,
    /// self-loops and duplicate edges are silently skipped.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Adds a vertex with no neighbors. Idempotent.
    ///
    /// Returns `true` when the vertex was newly inserted.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adj.contains_key(&vertex) {
            return false;
        }

        self.adj.insert(vertex.clone(), Vec::new());
        self.order.push(vertex);
        true
    }

    /// Connects `u` and `v`, creating either endpoint if absent.
    ///
    /// Rejects self-loops and already existing edges.
    pub fn try_add_edge(&mut self, u: V, v: V) -> Result<(), AddEdgeError> {
        if u == v {
            return Err(AddEdgeError::new(AddEdgeErrorKind::SelfLoop));
        }

        self.add_vertex(u.clone());
        self.add_vertex(v.clone());

        if self.adj[&u].contains(&v) {
            return Err(AddEdgeError::new(AddEdgeErrorKind::MultiEdge));
        }

        if let Some(neighbors) = self.adj.get_mut(&u) {
            neighbors.push(v.clone());
        }
        if let Some(neighbors) = self.adj.get_mut(&v) {
            neighbors.push(u);
        }

        Ok(())
    }

    /// Silent no-op variant of [`try_add_edge`](Self::try_add_edge).
    ///
    /// Note that the endpoints are still created even when the edge itself is
    /// rejected as a duplicate; a rejected self-loop creates nothing.
    pub fn add_edge(&mut self, u: V, v: V) {
        self.try_add_edge(u, v).ok();
    }

    /// Disconnects `u` and `v`, removing each from the other's neighbor
    /// list.
    ///
    /// No-op returning `false` when either vertex or the edge is absent.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        if !self.adj.contains_key(u) || !self.adj.contains_key(v) {
            return false;
        }

        let Some(position) = self.adj[u].iter().position(|n| n == v) else {
            return false;
        };

        if let Some(neighbors) = self.adj.get_mut(u) {
            neighbors.remove(position);
        }
        if let Some(neighbors) = self.adj.get_mut(v) {
            if let Some(position) = neighbors.iter().position(|n| n == u) {
                neighbors.remove(position);
            }
        }

        true
    }

    /// Removes the vertex and all edges incident to it.
    ///
    /// Every other vertex's neighbor list is purged of references to the
    /// removed vertex first. No-op returning `false` when the vertex is
    /// absent.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.adj.remove(vertex).is_none() {
            return false;
        }

        for neighbors in self.adj.values_mut() {
            if let Some(position) = neighbors.iter().position(|n| n == vertex) {
                neighbors.remove(position);
            }
        }

        self.order.retain(|v| v != vertex);
        true
    }

    pub fn contains_edge(&self, u: &V, v: &V) -> bool {
        self.adj.get(u).is_some_and(|neighbors| neighbors.contains(v))
    }

    /// Returns every edge once, as `(u, v)` in the order of first encounter;
    /// the symmetric `(v, u)` counterpart is never reported.
    pub fn edges(&self) -> Vec<(V, V)> {
        let mut edges = Vec::new();
        let mut reported = FxHashSet::default();

        for u in &self.order {
            for n in &self.adj[u] {
                if reported.contains(&(u.clone(), n.clone())) {
                    continue;
                }

                reported.insert((n.clone(), u.clone()));
                edges.push((u.clone(), n.clone()));
            }
        }

        edges
    }

    /// Checks that the path can be traversed edge by edge.
    ///
    /// The empty path is valid, any path mentioning an absent vertex is
    /// invalid, and otherwise every consecutive pair must be connected.
    pub fn is_valid_path(&self, path: &[V]) -> bool {
        if path.iter().any(|vertex| !self.adj.contains_key(vertex)) {
            return false;
        }

        path.windows(2).all(|step| self.contains_edge(&step[0], &step[1]))
    }
}

impl<V> UnGraph<V>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
{
    /// Depth-first traversal from `start` in discovery order, expanding
    /// neighbors in ascending label order.
    ///
    /// When `end` is given, it is recorded and the whole traversal stops
    /// right there (so `dfs(v, Some(v))` is just `[v]`). An absent `start`
    /// yields an empty vec.
    pub fn dfs(&self, start: &V, end: Option<&V>) -> Vec<V> {
        if !self.adj.contains_key(start) {
            return Vec::new();
        }

        let mut raw = RawVisit::<Self, RawDfs>::new(Some(self.vertex_count()));
        raw.start(start.clone());

        let mut discovered = Vec::new();
        while let Some(vertex) = raw.next(self, |vertex| Some(vertex) != end) {
            let reached_end = Some(&vertex) == end;
            discovered.push(vertex);
            if reached_end {
                break;
            }
        }

        discovered
    }

    /// Breadth-first traversal from `start` in level order, expanding
    /// neighbors in ascending label order.
    ///
    /// The `end` handling is the same as for [`dfs`](Self::dfs): recorded,
    /// then the traversal stops.
    pub fn bfs(&self, start: &V, end: Option<&V>) -> Vec<V> {
        if !self.adj.contains_key(start) {
            return Vec::new();
        }

        let mut raw = RawVisit::<Self, RawBfs>::new(Some(self.vertex_count()));
        raw.start(start.clone());

        let mut discovered = Vec::new();
        while let Some(vertex) = raw.next(self, |vertex| Some(vertex) != end) {
            let reached_end = Some(&vertex) == end;
            discovered.push(vertex);
            if reached_end {
                break;
            }
        }

        discovered
    }

    /// Returns the number of connected components.
    pub fn count_components(&self) -> usize {
        components::count_components(self)
    }

    /// Returns `true` if the graph contains a cycle.
    pub fn has_cycle(&self) -> bool {
        cycle::is_cyclic_undirected(self)
    }
}

impl<V> Default for UnGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> GraphBase for UnGraph<V>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
{
    type VertexId = V;
}

impl<V> VertexSet for UnGraph<V>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
{
    type VerticesIter<'a> = iter::Cloned<slice::Iter<'a, V>>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize {
        self.order.len()
    }

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.order.iter().cloned()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adj.contains_key(vertex)
    }
}

impl<V> Neighbors for UnGraph<V>
where
    V: Clone + Eq + Hash + Ord + fmt::Debug,
{
    type NeighborsIter<'a> = iter::Cloned<slice::Iter<'a, V>>
    where
        Self: 'a;

    // The direction is ignored, each edge goes both ways.
    fn neighbors_directed(&self, from: &V, _dir: Direction) -> Self::NeighborsIter<'_> {
        self.adj
            .get(from)
            .map(|neighbors| neighbors.as_slice())
            .unwrap_or(&[])
            .iter()
            .cloned()
    }

    fn degree_directed(&self, vertex: &V, _dir: Direction) -> usize {
        self.adj.get(vertex).map_or(0, Vec::len)
    }
}

impl<V> fmt::Display for UnGraph<V>
where
    V: fmt::Display + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<_> = self
            .order
            .iter()
            .map(|vertex| {
                let neighbors = self.adj[vertex]
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{vertex}: [{neighbors}]")
            })
            .collect();

        let single_line = lines.join(", ");
        if single_line.len() < 70 {
            write!(f, "GRAPH: {{{single_line}}}")
        } else {
            write!(f, "GRAPH: {{\n  {}}}", lines.join("\n  "))
        }
    }
}
