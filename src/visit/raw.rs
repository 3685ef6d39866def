use std::{
    collections::{HashSet, VecDeque},
    hash::BuildHasherDefault,
};

use rustc_hash::FxHashSet;

use crate::core::{GraphBase, Neighbors};

use super::visit_set::VisitSet;

pub trait TraversalCollection<T>: Default {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn clear(&mut self);
}

pub struct Queue<T>(pub VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> TraversalCollection<T> for Queue<T> {
    fn push(&mut self, value: T) {
        self.0.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug)]
pub struct Stack<T>(pub Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TraversalCollection<T> for Stack<T> {
    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

pub(crate) trait RawAlgo<G: GraphBase> {
    type Collection: TraversalCollection<G::VertexId>;

    fn visit_on_start() -> bool;
}

/// Frontier and visited set of an in-progress traversal.
///
/// The `next` implementations take an `expand` callback which is consulted
/// for every vertex that is reported: returning `false` keeps the neighbors
/// of that vertex off the frontier while the vertex itself is still
/// reported. This is how the traversal drivers cut a search short at a goal
/// vertex.
pub(crate) struct RawVisit<G: GraphBase, A: RawAlgo<G>> {
    pub collection: A::Collection,
    // FixedBitSet cannot be used because the visitors are detached from the
    // graph and vertices can be added or removed during the visiting.
    pub visited: FxHashSet<G::VertexId>,
}

impl<G: GraphBase, A: RawAlgo<G>> RawVisit<G, A> {
    pub fn new(count_hint: Option<usize>) -> Self {
        let visited = count_hint
            .map(|count| HashSet::with_capacity_and_hasher(count, BuildHasherDefault::default()))
            .unwrap_or_default();

        Self {
            collection: A::Collection::default(),
            visited,
        }
    }

    pub fn start(&mut self, root: G::VertexId) {
        if A::visit_on_start() {
            self.visited.visit(root.clone());
        }

        self.collection.clear();
        self.collection.push(root);
    }

    pub fn reset(&mut self) {
        self.collection.clear();
        self.visited.reset_visited();
    }
}

fn sorted_neighbors<G>(graph: &G, vertex: &G::VertexId) -> Vec<G::VertexId>
where
    G: Neighbors,
{
    let mut neighbors: Vec<_> = graph.neighbors(vertex).collect();
    neighbors.sort_unstable();
    neighbors
}

pub(crate) enum RawDfs {}

impl<G: GraphBase> RawAlgo<G> for RawDfs {
    type Collection = Stack<G::VertexId>;

    // Marking the root on start would change nothing for DFS since the mark
    // is checked when popping anyway.
    fn visit_on_start() -> bool {
        false
    }
}

impl<G: GraphBase> RawVisit<G, RawDfs> {
    pub fn next<F>(&mut self, graph: &G, mut expand: F) -> Option<G::VertexId>
    where
        G: Neighbors,
        F: FnMut(&G::VertexId) -> bool,
    {
        // Vertices are marked visited when popped, not when pushed, and
        // candidates are pushed even when they are already on the stack. The
        // most recently pushed occurrence then wins, which makes the reported
        // order equal to the recursive traversal.
        while let Some(vertex) = self.collection.pop() {
            if !self.visited.visit(vertex.clone()) {
                continue;
            }

            if expand(&vertex) {
                // Push in descending order so that the smallest neighbor is
                // expanded first.
                for next in sorted_neighbors(graph, &vertex).into_iter().rev() {
                    if !self.visited.is_visited(&next) {
                        self.collection.push(next);
                    }
                }
            }

            return Some(vertex);
        }

        None
    }
}

pub(crate) enum RawBfs {}

impl<G: GraphBase> RawAlgo<G> for RawBfs {
    type Collection = Queue<G::VertexId>;

    fn visit_on_start() -> bool {
        true
    }
}

impl<G: GraphBase> RawVisit<G, RawBfs> {
    pub fn next<F>(&mut self, graph: &G, mut expand: F) -> Option<G::VertexId>
    where
        G: Neighbors,
        F: FnMut(&G::VertexId) -> bool,
    {
        let vertex = self.collection.pop()?;

        if expand(&vertex) {
            for next in sorted_neighbors(graph, &vertex) {
                if self.visited.visit(next.clone()) {
                    self.collection.push(next);
                }
            }
        }

        Some(vertex)
    }
}
