pub mod di_graph;
pub mod un_graph;

#[doc(inline)]
pub use self::{di_graph::DiGraph, un_graph::UnGraph};
