//! Find out whether a graph contains a [cycle].
//!
//! Both detectors work by iterative pruning: vertices that provably cannot be
//! part of a cycle are removed until either nothing is left (acyclic) or no
//! vertex can be removed anymore (cyclic). The two differ only in the removal
//! criterion, which depends on whether edge direction matters.
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use simurg::{algo::is_cyclic, graph::DiGraph};
//!
//! let mut graph = DiGraph::from_edges([(0, 1, 1), (1, 2, 1)]);
//!
//! assert!(!is_cyclic(&graph));
//!
//! graph.add_edge(2.into(), 0.into(), 1);
//!
//! assert!(is_cyclic(&graph));
//! ```

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{marker::Direction, Neighbors, VertexSet};

/// Returns `true` if the graph contains a directed cycle.
///
/// A vertex with no remaining outgoing edges cannot close a cycle, so
/// vertices are pruned by zero out-degree (the out-degree restriction of the
/// Kahn topological sort). Incoming edges play no role in the removal
/// criterion. Any vertex surviving the pruning lies on a cycle.
pub fn is_cyclic<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet,
{
    let mut out_deg = FxHashMap::default();
    let mut worklist = Vec::new();

    for vertex in graph.vertices() {
        let deg = graph.degree_directed(&vertex, Direction::Outgoing);
        if deg == 0 {
            worklist.push(vertex.clone());
        }
        out_deg.insert(vertex, deg);
    }

    let mut removed = 0;
    while let Some(vertex) = worklist.pop() {
        removed += 1;

        // Removing the vertex erases the outgoing edges of its predecessors.
        for pred in graph.neighbors_directed(&vertex, Direction::Incoming) {
            if let Some(deg) = out_deg.get_mut(&pred) {
                *deg -= 1;
                if *deg == 0 {
                    worklist.push(pred);
                }
            }
        }
    }

    removed != graph.vertex_count()
}

/// Returns `true` if the graph contains a cycle, ignoring edge direction.
///
/// The undirected criterion is the effective degree: a vertex connected to at
/// most one not-yet-pruned neighbor is a leaf (or isolated) and cannot lie on
/// a cycle.
pub fn is_cyclic_undirected<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet,
{
    let mut deg = FxHashMap::default();
    let mut worklist = Vec::new();

    for vertex in graph.vertices() {
        let d = graph.degree_directed(&vertex, Direction::Outgoing);
        if d <= 1 {
            worklist.push(vertex.clone());
        }
        deg.insert(vertex, d);
    }

    let mut pruned = FxHashSet::default();
    while let Some(vertex) = worklist.pop() {
        if !pruned.insert(vertex.clone()) {
            continue;
        }

        for next in graph.neighbors(&vertex) {
            if pruned.contains(&next) {
                continue;
            }

            if let Some(d) = deg.get_mut(&next) {
                *d -= 1;
                if *d == 1 {
                    worklist.push(next);
                }
            }
        }
    }

    pruned.len() != graph.vertex_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DiGraph, UnGraph};

    #[test]
    fn directed_tree_is_acyclic() {
        let graph = DiGraph::from_edges([(0, 1, 1), (0, 2, 1), (1, 3, 1)]);

        assert!(!is_cyclic(&graph));
    }

    #[test]
    fn directed_triangle_is_cyclic() {
        let graph = DiGraph::from_edges([(0, 1, 1), (1, 2, 1), (2, 0, 1)]);

        assert!(is_cyclic(&graph));
    }

    #[test]
    fn direction_matters() {
        // Both edges point at 2, so there is no way around.
        let graph = DiGraph::from_edges([(0, 2, 1), (1, 2, 1), (0, 1, 1)]);

        assert!(!is_cyclic(&graph));
    }

    #[test]
    fn cycle_with_tail() {
        let graph = DiGraph::from_edges([(0, 1, 1), (1, 2, 1), (2, 0, 1), (3, 0, 1), (2, 4, 1)]);

        assert!(is_cyclic(&graph));
    }

    #[test]
    fn empty_graphs_are_acyclic() {
        assert!(!is_cyclic(&DiGraph::new()));
        assert!(!is_cyclic_undirected(&UnGraph::<char>::new()));
    }

    #[test]
    fn undirected_path_is_acyclic() {
        let graph = UnGraph::from_edges([('a', 'b'), ('b', 'c'), ('c', 'd')]);

        assert!(!is_cyclic_undirected(&graph));
    }

    #[test]
    fn undirected_square_is_cyclic() {
        let graph = UnGraph::from_edges([('a', 'b'), ('b', 'c'), ('c', 'd'), ('d', 'a')]);

        assert!(is_cyclic_undirected(&graph));
    }

    #[test]
    fn undirected_edge_is_not_a_cycle() {
        // A single undirected edge is symmetric storage, not a cycle of
        // length two.
        let graph = UnGraph::from_edges([('a', 'b')]);

        assert!(!is_cyclic_undirected(&graph));

        let mut forest = UnGraph::new();
        forest.add_vertex('x');
        forest.add_edge('a', 'b');
        forest.add_edge('b', 'c');
        assert!(!is_cyclic_undirected(&forest));
    }

    #[test]
    fn undirected_cycle_with_trees_attached() {
        let mut graph = UnGraph::from_edges([('a', 'b'), ('b', 'c'), ('c', 'a')]);
        graph.add_edge('c', 'd');
        graph.add_edge('d', 'e');
        graph.add_edge('d', 'f');

        assert!(is_cyclic_undirected(&graph));

        graph.remove_edge(&'c', &'a');
        assert!(!is_cyclic_undirected(&graph));
    }
}
