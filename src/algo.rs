pub mod components;
pub mod cycle;
pub mod shortest_paths;

pub use components::count_components;
pub use cycle::{is_cyclic, is_cyclic_undirected};
pub use shortest_paths::{dijkstra, ShortestPaths};
