pub mod algo;
pub mod core;
pub mod graph;
pub mod visit;

pub use graph::{DiGraph, UnGraph};

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::{GraphBase, Neighbors, VertexSet},
        visit::Visitor,
    };
}
