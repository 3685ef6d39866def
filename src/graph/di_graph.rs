//! Directed weighted graph backed by a dense adjacency matrix.

use std::fmt;
use std::ops::Range;

use crate::{
    algo::{cycle, shortest_paths, ShortestPaths},
    core::{
        id::VertexId, marker::Direction, AddEdgeError, AddEdgeErrorKind, GraphBase, Neighbors,
        VertexSet,
    },
    visit::raw::{RawBfs, RawDfs, RawVisit},
};

/// Directed graph with dense integer vertex ids and positive edge weights.
///
/// The graph is backed by a row-major adjacency matrix where the cell
/// `(src, dst)` holds the weight of the edge `src → dst` and `0` means that
/// there is no edge. Self-loops and duplicate edges are not representable;
/// vertices are only ever appended, so a once-valid [`VertexId`] stays valid
/// for the lifetime of the graph.
///
/// Mutation with invalid arguments (out-of-range endpoints, zero weight,
/// self-loop) is a silent no-op. Use [`try_add_edge`](Self::try_add_edge)
/// when the cause of a rejection matters.
///
/// # Examples
///
/// ```
/// use simurg::graph::DiGraph;
///
/// let mut graph = DiGraph::new();
///
/// graph.add_vertex();
/// graph.add_vertex();
/// graph.add_vertex();
///
/// graph.add_edge(0.into(), 1.into(), 10);
/// graph.add_edge(1.into(), 2.into(), 5);
///
/// assert!(graph.is_valid_path(&[0.into(), 1.into(), 2.into()]));
/// assert!(!graph.has_cycle());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    // Row-major, side length `capacity`. Only the top-left
    // `vertex_count × vertex_count` square is meaningful.
    matrix: Vec<u64>,
    capacity: usize,
    vertex_count: usize,
    edge_count: usize,
}

impl DiGraph {
    pub fn new() -> Self {
        Self {
            matrix: Vec::new(),
            capacity: 0,
            vertex_count: 0,
            edge_count: 0,
        }
    }

    pub fn with_capacity(vertex_count: usize) -> Self {
        let mut graph = Self::new();
        graph.ensure_capacity(vertex_count);
        graph
    }

    /// Builds a graph from `(src, dst, weight)` triples.
    ///
    /// The vertex count is `max(src, dst) + 1` over the list. Each triple is
    /// then added under the [`add_edge`](Self::add_edge) rules, so invalid
    /// entries (zero weight, self-loops) are silently skipped.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, u64)>,
    {
        let edges: Vec<_> = edges.into_iter().collect();
        let count = edges
            .iter()
            .map(|&(src, dst, _)| src.max(dst) + 1)
            .max()
            .unwrap_or(0);

        let mut graph = Self::with_capacity(count);
        for _ in 0..count {
            graph.add_vertex();
        }

        for (src, dst, weight) in edges {
            graph.add_edge(src.into(), dst.into(), weight);
        }

        graph
    }

    /// Appends one vertex and returns the new vertex count.
    ///
    /// The id of the new vertex is `count - 1`. This operation cannot fail
    /// and ids are never reused.
    pub fn add_vertex(&mut self) -> usize {
        self.ensure_capacity(self.vertex_count + 1);
        self.vertex_count += 1;
        self.vertex_count
    }

    /// Sets the weight of the edge `src → dst`, overwriting any previous
    /// weight.
    ///
    /// Rejects zero weights, self-loops and out-of-range endpoints.
    pub fn try_add_edge(
        &mut self,
        src: VertexId,
        dst: VertexId,
        weight: u64,
    ) -> Result<(), AddEdgeError> {
        if weight == 0 {
            return Err(AddEdgeError::new(AddEdgeErrorKind::InvalidWeight));
        }

        if src.as_usize() >= self.vertex_count {
            return Err(AddEdgeError::new(AddEdgeErrorKind::SourceAbsent));
        }

        if dst.as_usize() >= self.vertex_count {
            return Err(AddEdgeError::new(AddEdgeErrorKind::DestinationAbsent));
        }

        if src == dst {
            return Err(AddEdgeError::new(AddEdgeErrorKind::SelfLoop));
        }

        let cell = &mut self.matrix[src.as_usize() * self.capacity + dst.as_usize()];
        if *cell == 0 {
            self.edge_count += 1;
        }
        *cell = weight;

        Ok(())
    }

    /// Silent no-op variant of [`try_add_edge`](Self::try_add_edge).
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId, weight: u64) {
        self.try_add_edge(src, dst, weight).ok();
    }

    /// Clears the edge `src → dst` and returns its previous weight.
    ///
    /// No-op returning `None` when the endpoints are out of range or the edge
    /// does not exist.
    pub fn remove_edge(&mut self, src: VertexId, dst: VertexId) -> Option<u64> {
        if src.as_usize() >= self.vertex_count || dst.as_usize() >= self.vertex_count {
            return None;
        }

        let cell = &mut self.matrix[src.as_usize() * self.capacity + dst.as_usize()];
        if *cell == 0 {
            return None;
        }

        let weight = *cell;
        *cell = 0;
        self.edge_count -= 1;
        Some(weight)
    }

    pub fn edge_weight(&self, src: VertexId, dst: VertexId) -> Option<u64> {
        if src.as_usize() >= self.vertex_count || dst.as_usize() >= self.vertex_count {
            return None;
        }

        match self.matrix[src.as_usize() * self.capacity + dst.as_usize()] {
            0 => None,
            weight => Some(weight),
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterates over all `(src, dst, weight)` triples in row-major order
    /// (source ascending, then destination ascending).
    pub fn edges(&self) -> Edges<'_> {
        Edges {
            matrix: &self.matrix,
            capacity: self.capacity,
            vertex_count: self.vertex_count,
            row: 0,
            col: 0,
        }
    }

    /// Iterates over the outgoing edges of `from` as `(dst, weight)` pairs,
    /// destination ascending. Empty for an out-of-range vertex.
    pub fn outgoing(&self, from: VertexId) -> Outgoing<'_> {
        let other = if from.as_usize() < self.vertex_count {
            0
        } else {
            self.vertex_count
        };

        Outgoing {
            matrix: &self.matrix,
            capacity: self.capacity,
            vertex_count: self.vertex_count,
            src: from.as_usize(),
            other,
        }
    }

    /// Checks that the path can be traversed edge by edge.
    ///
    /// The empty path is valid, a single vertex path is valid iff the vertex
    /// is in range, and a longer path is valid iff all vertices are in range
    /// and every consecutive pair is joined by an edge.
    pub fn is_valid_path(&self, path: &[VertexId]) -> bool {
        if path.iter().any(|vertex| !self.contains_vertex(vertex)) {
            return false;
        }

        path.windows(2)
            .all(|step| self.edge_weight(step[0], step[1]).is_some())
    }

    /// Depth-first traversal from `start` in discovery order, expanding
    /// neighbors in ascending id order.
    ///
    /// When `end` is given, it is recorded upon discovery but not expanded;
    /// the remaining branches of the traversal still run, so only vertices
    /// reachable solely through `end` are cut off. As a consequence of the
    /// end vertex never being expanded, `dfs(v, Some(v))` is empty. An
    /// out-of-range `start` yields an empty vec.
    pub fn dfs(&self, start: VertexId, end: Option<VertexId>) -> Vec<VertexId> {
        if !self.contains_vertex(&start) || end == Some(start) {
            return Vec::new();
        }

        let mut raw = RawVisit::<Self, RawDfs>::new(Some(self.vertex_count));
        raw.start(start);

        let mut discovered = Vec::new();
        while let Some(vertex) = raw.next(self, |vertex| Some(*vertex) != end) {
            discovered.push(vertex);
        }

        discovered
    }

    /// Breadth-first traversal from `start` in level order, expanding
    /// neighbors in ascending id order.
    ///
    /// When `end` is given, the traversal halts the moment `end` is dequeued
    /// and `end` is *excluded* from the result. This is a deliberate
    /// asymmetry with [`dfs`](Self::dfs). An out-of-range `start` yields an
    /// empty vec.
    pub fn bfs(&self, start: VertexId, end: Option<VertexId>) -> Vec<VertexId> {
        if !self.contains_vertex(&start) {
            return Vec::new();
        }

        let mut raw = RawVisit::<Self, RawBfs>::new(Some(self.vertex_count));
        raw.start(start);

        let mut discovered = Vec::new();
        while let Some(vertex) = raw.next(self, |vertex| Some(*vertex) != end) {
            if Some(vertex) == end {
                break;
            }
            discovered.push(vertex);
        }

        discovered
    }

    /// Returns `true` if the graph contains a directed cycle.
    ///
    /// Edge weights are ignored, only edge existence matters.
    pub fn has_cycle(&self) -> bool {
        cycle::is_cyclic(self)
    }

    /// Single-source shortest path distances from `src` to every vertex.
    ///
    /// An out-of-range `src` produces all-unreachable distances.
    pub fn dijkstra(&self, src: VertexId) -> ShortestPaths {
        shortest_paths::dijkstra(self, src)
    }

    fn ensure_capacity(&mut self, capacity: usize) {
        if capacity <= self.capacity {
            return;
        }

        let new_capacity = (self.capacity * 2).max(capacity.next_power_of_two());
        let mut matrix = vec![0; new_capacity * new_capacity];

        for row in 0..self.vertex_count {
            for col in 0..self.vertex_count {
                matrix[row * new_capacity + col] = self.matrix[row * self.capacity + col];
            }
        }

        self.matrix = matrix;
        self.capacity = new_capacity;
    }
}

impl GraphBase for DiGraph {
    type VertexId = VertexId;
}

impl VertexSet for DiGraph {
    type VerticesIter<'a> = VertexIds
    where
        Self: 'a;

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn vertices(&self) -> Self::VerticesIter<'_> {
        VertexIds {
            range: 0..self.vertex_count,
        }
    }

    fn contains_vertex(&self, vertex: &VertexId) -> bool {
        vertex.as_usize() < self.vertex_count
    }
}

impl Neighbors for DiGraph {
    type NeighborsIter<'a> = NeighborsIter<'a>
    where
        Self: 'a;

    fn neighbors_directed(&self, from: &VertexId, dir: Direction) -> Self::NeighborsIter<'_> {
        let other = if from.as_usize() < self.vertex_count {
            0
        } else {
            self.vertex_count
        };

        NeighborsIter {
            matrix: &self.matrix,
            capacity: self.capacity,
            vertex_count: self.vertex_count,
            src: from.as_usize(),
            other,
            dir,
        }
    }
}

/// Iterator over the vertex ids `0..vertex_count`.
pub struct VertexIds {
    range: Range<usize>,
}

impl Iterator for VertexIds {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(VertexId::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

/// Iterator over all edges of the graph in row-major order.
pub struct Edges<'a> {
    matrix: &'a [u64],
    capacity: usize,
    vertex_count: usize,
    row: usize,
    col: usize,
}

impl Iterator for Edges<'_> {
    type Item = (VertexId, VertexId, u64);

    fn next(&mut self) -> Option<Self::Item> {
        while self.row < self.vertex_count {
            let (row, col) = (self.row, self.col);

            self.col += 1;
            if self.col == self.vertex_count {
                self.col = 0;
                self.row += 1;
            }

            let weight = self.matrix[row * self.capacity + col];
            if weight != 0 {
                return Some((VertexId::new(row), VertexId::new(col), weight));
            }
        }

        None
    }
}

/// Iterator over the outgoing edges of a vertex.
pub struct Outgoing<'a> {
    matrix: &'a [u64],
    capacity: usize,
    vertex_count: usize,
    src: usize,
    other: usize,
}

impl Iterator for Outgoing<'_> {
    type Item = (VertexId, u64);

    fn next(&mut self) -> Option<Self::Item> {
        while self.other < self.vertex_count {
            let other = self.other;
            self.other += 1;

            let weight = self.matrix[self.src * self.capacity + other];
            if weight != 0 {
                return Some((VertexId::new(other), weight));
            }
        }

        None
    }
}

/// Iterator over the neighbors of a vertex in one direction.
pub struct NeighborsIter<'a> {
    matrix: &'a [u64],
    capacity: usize,
    vertex_count: usize,
    src: usize,
    other: usize,
    dir: Direction,
}

impl Iterator for NeighborsIter<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        while self.other < self.vertex_count {
            let other = self.other;
            self.other += 1;

            let index = match self.dir {
                Direction::Outgoing => self.src * self.capacity + other,
                Direction::Incoming => other * self.capacity + self.src,
            };

            if self.matrix[index] != 0 {
                return Some(VertexId::new(other));
            }
        }

        None
    }
}

impl fmt::Display for DiGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vertex_count == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }

        writeln!(f, "GRAPH ({} vertices):", self.vertex_count)?;

        write!(f, "   |")?;
        for col in 0..self.vertex_count {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(self.vertex_count * 3 + 4))?;

        for row in 0..self.vertex_count {
            write!(f, "{:>2} |", row)?;
            for col in 0..self.vertex_count {
                write!(f, "{:>3}", self.matrix[row * self.capacity + col])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    // The canonical example graph used throughout the tests.
    fn create_basic_graph() -> DiGraph {
        DiGraph::from_edges([
            (0, 1, 10),
            (4, 0, 12),
            (1, 4, 15),
            (4, 3, 3),
            (3, 1, 5),
            (2, 1, 23),
            (3, 2, 7),
        ])
    }

    #[test]
    fn add_vertex_returns_count() {
        let mut graph = DiGraph::new();

        assert_eq!(graph.add_vertex(), 1);
        assert_eq!(graph.add_vertex(), 2);
        assert_eq!(graph.add_vertex(), 3);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn add_vertex_preserves_edges() {
        let mut graph = DiGraph::new();
        for _ in 0..2 {
            graph.add_vertex();
        }
        graph.add_edge(v(0), v(1), 7);

        // Grow past the initial capacity.
        for _ in 0..20 {
            graph.add_vertex();
        }

        assert_eq!(graph.edge_weight(v(0), v(1)), Some(7));
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(v(0), v(1), 7)]);
    }

    #[test]
    fn add_edge_rejects_invalid() {
        let mut graph = DiGraph::new();
        for _ in 0..3 {
            graph.add_vertex();
        }

        assert_matches!(
            graph.try_add_edge(v(0), v(1), 0),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::InvalidWeight
            })
        );
        assert_matches!(
            graph.try_add_edge(v(3), v(1), 1),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::SourceAbsent
            })
        );
        assert_matches!(
            graph.try_add_edge(v(1), v(7), 1),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::DestinationAbsent
            })
        );
        assert_matches!(
            graph.try_add_edge(v(1), v(1), 1),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::SelfLoop
            })
        );

        // The silent variant must not have mutated anything either.
        graph.add_edge(v(0), v(1), 0);
        graph.add_edge(v(3), v(1), 1);
        graph.add_edge(v(1), v(1), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn add_edge_overwrites() {
        let mut graph = DiGraph::new();
        for _ in 0..2 {
            graph.add_vertex();
        }

        graph.add_edge(v(0), v(1), 3);
        graph.add_edge(v(0), v(1), 9);

        assert_eq!(graph.edge_weight(v(0), v(1)), Some(9));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn remove_edge_returns_weight() {
        let mut graph = DiGraph::new();
        for _ in 0..2 {
            graph.add_vertex();
        }
        graph.add_edge(v(0), v(1), 3);

        assert_eq!(graph.remove_edge(v(0), v(1)), Some(3));
        assert_eq!(graph.remove_edge(v(0), v(1)), None);
        assert_eq!(graph.remove_edge(v(5), v(1)), None);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn vertices_ascending() {
        let graph = create_basic_graph();

        assert_eq!(
            graph.vertices().collect::<Vec<_>>(),
            vec![v(0), v(1), v(2), v(3), v(4)]
        );
    }

    #[test]
    fn edges_row_major() {
        let graph = create_basic_graph();

        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![
                (v(0), v(1), 10),
                (v(1), v(4), 15),
                (v(2), v(1), 23),
                (v(3), v(1), 5),
                (v(3), v(2), 7),
                (v(4), v(0), 12),
                (v(4), v(3), 3),
            ]
        );
    }

    #[test]
    fn from_edges_vertex_count() {
        assert_eq!(create_basic_graph().vertex_count(), 5);
        assert_eq!(DiGraph::from_edges([]).vertex_count(), 0);
        assert_eq!(DiGraph::from_edges([(7, 2, 1)]).vertex_count(), 8);
    }

    #[test]
    fn valid_path() {
        let graph = create_basic_graph();

        assert!(graph.is_valid_path(&[v(0), v(1), v(4), v(3)]));
        assert!(!graph.is_valid_path(&[v(1), v(3), v(2), v(1)]));
        assert!(!graph.is_valid_path(&[v(0), v(4)]));
        assert!(graph.is_valid_path(&[v(4), v(0)]));
        assert!(graph.is_valid_path(&[]));
        assert!(graph.is_valid_path(&[v(2)]));
        assert!(!graph.is_valid_path(&[v(5)]));
        assert!(!graph.is_valid_path(&[v(0), v(1), v(9)]));
    }

    #[test]
    fn dfs_discovery_order() {
        let graph = create_basic_graph();

        assert_eq!(graph.dfs(v(0), None), vec![v(0), v(1), v(4), v(3), v(2)]);
        assert_eq!(graph.dfs(v(4), None), vec![v(4), v(0), v(1), v(3), v(2)]);
        assert_eq!(graph.dfs(v(2), None), vec![v(2), v(1), v(4), v(0), v(3)]);
    }

    #[test]
    fn dfs_end_is_recorded_but_not_expanded() {
        let graph = create_basic_graph();

        // Vertex 2 is reachable only through 3, so stopping the expansion at
        // 3 cuts it off while the rest of the traversal still runs.
        assert_eq!(graph.dfs(v(0), Some(v(3))), vec![v(0), v(1), v(4), v(3)]);
        assert_eq!(graph.dfs(v(0), Some(v(1))), vec![v(0), v(1)]);
    }

    #[test]
    fn dfs_end_equals_start() {
        let graph = create_basic_graph();

        assert_eq!(graph.dfs(v(2), Some(v(2))), vec![]);
    }

    #[test]
    fn dfs_start_out_of_range() {
        let graph = create_basic_graph();

        assert_eq!(graph.dfs(v(9), None), vec![]);
    }

    #[test]
    fn bfs_level_order() {
        let graph = create_basic_graph();

        assert_eq!(graph.bfs(v(0), None), vec![v(0), v(1), v(4), v(3), v(2)]);
        assert_eq!(graph.bfs(v(4), None), vec![v(4), v(0), v(3), v(1), v(2)]);
    }

    #[test]
    fn bfs_end_is_excluded() {
        let graph = create_basic_graph();

        // Unlike dfs, bfs halts on `end` without recording it.
        assert_eq!(graph.bfs(v(0), Some(v(3))), vec![v(0), v(1), v(4)]);
        assert_eq!(graph.bfs(v(2), Some(v(2))), vec![]);
    }

    #[test]
    fn bfs_start_out_of_range() {
        let graph = create_basic_graph();

        assert_eq!(graph.bfs(v(9), None), vec![]);
    }

    #[test]
    fn cycle_over_edits() {
        let mut graph = create_basic_graph();

        // 0 → 1 → 4 → 0 is a cycle.
        assert!(graph.has_cycle());

        graph.remove_edge(v(3), v(1));
        assert!(graph.has_cycle());

        // Breaks 0-1-4, but 1 → 4 → 3 → 2 → 1 remains.
        graph.remove_edge(v(4), v(0));
        assert!(graph.has_cycle());

        graph.remove_edge(v(3), v(2));
        assert!(!graph.has_cycle());

        graph.add_edge(v(1), v(3), 1);
        assert!(!graph.has_cycle());

        graph.add_edge(v(4), v(0), 1);
        assert!(graph.has_cycle());
    }

    #[test]
    fn display_renders_matrix() {
        let graph = create_basic_graph();
        let rendered = graph.to_string();

        assert!(rendered.starts_with("GRAPH (5 vertices):"));
        assert!(rendered.contains(" 10"));

        assert_eq!(DiGraph::new().to_string(), "EMPTY GRAPH\n");
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_from_edges_round_trip(
            edges in proptest::collection::vec((0..16usize, 0..16usize, 1..100u64), 0..64)
        ) {
            let graph = DiGraph::from_edges(edges.clone());
            let listed: Vec<_> = graph
                .edges()
                .map(|(src, dst, weight)| (src.as_usize(), dst.as_usize(), weight))
                .collect();

            let rebuilt = DiGraph::from_edges(listed.clone());

            // Rebuilding from the listed edges must reproduce the edge set.
            prop_assert_eq!(
                rebuilt
                    .edges()
                    .map(|(src, dst, weight)| (src.as_usize(), dst.as_usize(), weight))
                    .collect::<Vec<_>>(),
                listed
            );
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_tree_is_acyclic(raw in proptest::collection::vec(any::<u64>(), 1..32)) {
            let mut graph = DiGraph::new();
            for _ in 0..raw.len() + 1 {
                graph.add_vertex();
            }

            // Every vertex except the root points from a random earlier
            // vertex, which makes the graph a tree.
            for (index, entropy) in raw.iter().enumerate() {
                let child = index + 1;
                let parent = (entropy % child as u64) as usize;
                graph.add_edge(parent.into(), child.into(), 1);
            }

            prop_assert!(!graph.has_cycle());
        }
    }
}
