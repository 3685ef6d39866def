//! Count [connected components] of a graph.
//!
//! [connected components]:
//!     https://en.wikipedia.org/wiki/Component_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use simurg::{algo::count_components, graph::UnGraph};
//!
//! let mut graph = UnGraph::from_edges([("a", "b"), ("c", "d")]);
//! assert_eq!(count_components(&graph), 2);
//!
//! graph.add_edge("b", "c");
//! assert_eq!(count_components(&graph), 1);
//! ```

use crate::{
    core::{Neighbors, VertexSet},
    visit::{
        raw::{RawBfs, RawVisit},
        VisitSet,
    },
};

/// Returns the number of connected components of the graph.
///
/// Every not-yet-visited vertex roots a breadth-first traversal that swallows
/// its whole component; the number of roots needed to exhaust the graph is
/// the component count. On a directed graph this treats edges as traversable
/// in the outgoing direction only, so it is meaningful for undirected graphs.
pub fn count_components<G>(graph: &G) -> usize
where
    G: Neighbors + VertexSet,
{
    let mut raw = RawVisit::<G, RawBfs>::new(Some(graph.vertex_count()));
    let mut count = 0;

    for vertex in graph.vertices() {
        if raw.visited.is_visited(&vertex) {
            continue;
        }

        count += 1;
        raw.start(vertex);
        while raw.next(graph, |_| true).is_some() {}
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;

    #[test]
    fn empty_graph() {
        assert_eq!(count_components(&UnGraph::<char>::new()), 0);
    }

    #[test]
    fn isolated_vertices() {
        let mut graph = UnGraph::new();
        graph.add_vertex('a');
        graph.add_vertex('b');
        graph.add_vertex('c');

        assert_eq!(count_components(&graph), 3);
    }

    #[test]
    fn merging_components() {
        let mut graph = UnGraph::from_edges([('a', 'b'), ('c', 'd'), ('e', 'f')]);
        assert_eq!(count_components(&graph), 3);

        graph.add_edge('b', 'c');
        assert_eq!(count_components(&graph), 2);

        graph.add_edge('d', 'e');
        assert_eq!(count_components(&graph), 1);
    }

    #[test]
    fn splitting_components() {
        let mut graph = UnGraph::from_edges([('a', 'b'), ('b', 'c')]);
        assert_eq!(count_components(&graph), 1);

        graph.remove_edge(&'a', &'b');
        assert_eq!(count_components(&graph), 2);

        graph.remove_vertex(&'b');
        assert_eq!(count_components(&graph), 2);
    }
}
