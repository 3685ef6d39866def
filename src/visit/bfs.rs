use crate::core::{GraphBase, Neighbors, VertexSet};

use super::{
    raw::{RawBfs, RawVisit},
    VisitSet, Visitor,
};

/// Breadth-first traversal of a graph.
///
/// The visitor does not hold a reference to the graph; see the
/// [module](crate::visit) documentation for the consequences and for the
/// neighbor ordering guarantee.
pub struct Bfs<G>
where
    G: GraphBase,
{
    raw: RawVisit<G, RawBfs>,
}

pub struct BfsRooted<'a, G>
where
    G: GraphBase,
{
    raw: &'a mut RawVisit<G, RawBfs>,
}

impl<G> Bfs<G>
where
    G: GraphBase,
{
    pub fn new(graph: &G) -> Self
    where
        G: VertexSet,
    {
        Self {
            raw: RawVisit::new(Some(graph.vertex_count())),
        }
    }

    pub fn start(&mut self, root: G::VertexId) -> BfsRooted<'_, G> {
        self.raw.start(root);
        BfsRooted { raw: &mut self.raw }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &impl VisitSet<G::VertexId> {
        &self.raw.visited
    }
}

impl<G> Visitor<G> for BfsRooted<'_, G>
where
    G: Neighbors,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph, |_| true)
    }
}
