use std::fmt;

use thiserror::Error;

use super::Edge;

/// Error returned when an edge cannot be added to the graph.
///
/// The rejected edge is handed back to the caller.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<V, W> {
    pub edge: Edge<V, W>,
    pub kind: AddEdgeErrorKind,
}

impl<V, W> AddEdgeError<V, W> {
    pub fn new(edge: Edge<V, W>, kind: AddEdgeErrorKind) -> Self {
        Self { edge, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}
