/// Direction of an edge relative to a vertex.
///
/// Undirected graphs do not distinguish the two and treat every direction as
/// [`Direction::Outgoing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Outgoing,
    Incoming,
}

impl Direction {
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Outgoing => Direction::Incoming,
            Direction::Incoming => Direction::Outgoing,
        }
    }
}
