use std::{fmt::Debug, hash::Hash};

use super::marker::Direction;

/// Base trait of every graph in this crate.
///
/// The vertex id is the only associated type: for the dense directed graph it
/// is an integer newtype, for the labeled undirected graph it is the label
/// type itself. `Ord` is required because traversals guarantee that neighbors
/// are expanded in ascending order.
pub trait GraphBase {
    type VertexId: Clone + Eq + Hash + Ord + Debug;
}

/// Access to the set of vertices of a graph.
pub trait VertexSet: GraphBase {
    type VerticesIter<'a>: Iterator<Item = Self::VertexId>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize;

    fn vertices(&self) -> Self::VerticesIter<'_>;

    fn contains_vertex(&self, vertex: &Self::VertexId) -> bool;
}

/// Access to the neighbors of a vertex.
///
/// Asking for the neighbors of a vertex that is not in the graph yields an
/// empty iterator, it is not an error.
pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = Self::VertexId>
    where
        Self: 'a;

    fn neighbors_directed(&self, from: &Self::VertexId, dir: Direction)
        -> Self::NeighborsIter<'_>;

    fn neighbors(&self, from: &Self::VertexId) -> Self::NeighborsIter<'_> {
        self.neighbors_directed(from, Direction::Outgoing)
    }

    fn degree_directed(&self, vertex: &Self::VertexId, dir: Direction) -> usize {
        self.neighbors_directed(vertex, dir).count()
    }
}
