use crate::core::{GraphBase, Neighbors, VertexSet};

use super::{
    raw::{RawDfs, RawVisit},
    VisitSet, Visitor,
};

/// Depth-first traversal of a graph.
///
/// The visitor does not hold a reference to the graph; see the
/// [module](crate::visit) documentation for the consequences and for the
/// neighbor ordering guarantee.
pub struct Dfs<G>
where
    G: GraphBase,
{
    raw: RawVisit<G, RawDfs>,
}

pub struct DfsRooted<'a, G>
where
    G: GraphBase,
{
    raw: &'a mut RawVisit<G, RawDfs>,
}

impl<G> Dfs<G>
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

    pub fn start(&mut self, root: G::VertexId) -> DfsRooted<'_, G> {
        self.raw.start(root);
        DfsRooted { raw: &mut self.raw }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &impl VisitSet<G::VertexId> {
        &self.raw.visited
    }
}

impl<G> Visitor<G> for DfsRooted<'_, G>
where
    G: Neighbors,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph, |_| true)
    }
}
