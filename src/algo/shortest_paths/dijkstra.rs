use std::{cmp::Reverse, collections::BinaryHeap};

use fixedbitset::FixedBitSet;

use crate::{
    core::{id::VertexId, VertexSet},
    graph::DiGraph,
    visit::VisitSet,
};

use super::ShortestPaths;

/// Computes the shortest path distances from `source` to every vertex of the
/// graph.
///
/// All edge weights of [`DiGraph`] are positive by construction, so the
/// classic algorithm applies directly. An out-of-range `source` reaches
/// nothing and every distance is the unreachable sentinel.
pub fn dijkstra(graph: &DiGraph, source: VertexId) -> ShortestPaths {
    let mut dist: Vec<Option<u64>> = vec![None; graph.vertex_count()];

    if !graph.contains_vertex(&source) {
        return ShortestPaths { source, dist };
    }

    // The id space is dense, so a bit set is enough to track finished
    // vertices.
    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    let mut queue = BinaryHeap::new();

    dist[source.as_usize()] = Some(0);
    queue.push(Reverse((0, source)));

    while let Some(Reverse((vertex_dist, vertex))) = queue.pop() {
        // Relaxation pushes duplicates instead of decreasing keys; stale
        // entries are recognized here by the vertex being finished already.
        if !visited.visit(vertex) {
            continue;
        }

        for (next, weight) in graph.outgoing(vertex) {
            if visited.is_visited(&next) {
                continue;
            }

            let next_dist = vertex_dist + weight;

            match dist[next.as_usize()] {
                Some(curr) if curr <= next_dist => {}
                _ => {
                    dist[next.as_usize()] = Some(next_dist);
                    queue.push(Reverse((next_dist, next)));
                }
            }
        }
    }

    ShortestPaths { source, dist }
}
