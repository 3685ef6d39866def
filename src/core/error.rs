use std::fmt;

use thiserror::Error;

/// Error of the strict `try_add_edge` variants.
///
/// The plain `add_edge` methods discard this error, which gives the silent
/// no-op contract that the bulk constructors and most callers rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError {
    pub kind: AddEdgeErrorKind,
}

impl AddEdgeError {
    pub fn new(kind: AddEdgeErrorKind) -> Self {
        Self { kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
    SelfLoop,
    MultiEdge,
    InvalidWeight,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
            AddEdgeErrorKind::SelfLoop => "the graph does not allow self-loops",
            AddEdgeErrorKind::MultiEdge => {
                "an edge already exists and the graph does not allow multi edges"
            }
            AddEdgeErrorKind::InvalidWeight => "edge weight must be positive",
        };
        f.write_str(reason)
    }
}
