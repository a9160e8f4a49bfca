use thiserror::Error;

use crate::types::{EdgeId, VertexId};

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons why an algorithm refuses a graph.
///
/// These describe the caller's input, not a defect of the library: the same
/// graph will be refused every time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Precondition {
    #[error("graph must be biconnected, {0:?} is a cut vertex")]
    NotBiconnected(VertexId),

    #[error("graph must be connected")]
    Disconnected,

    #[error("graph must have at least two vertices, it has {0}")]
    TooFewVertices(usize),

    #[error("reference edge {0:?} does not belong to the graph")]
    ReferenceEdgeMissing(EdgeId),

    #[error("self-loop {0:?} is not supported")]
    SelfLoop(EdgeId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The algorithm cannot be applied to the given graph.
    #[error("cannot be applied: {0}")]
    NotApplicable(#[from] Precondition),

    /// A structural invariant of the decomposition did not hold.
    ///
    /// This is a bug, never a property of the input graph.
    #[error("invariant violated: {reason} (component {component:?}, edges {edges:?})")]
    InvariantViolation {
        reason: String,
        component: Option<usize>,
        edges: Vec<EdgeId>,
    },

    #[error("unknown vertex {0:?}")]
    UnknownVertex(VertexId),

    #[error("unknown edge {0:?}")]
    UnknownEdge(EdgeId),

    #[error("unknown tree node {0}")]
    UnknownNode(usize),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
            component: None,
            edges: Vec::new(),
        }
    }

    pub(crate) fn component_invariant(
        reason: impl Into<String>,
        component: usize,
        edges: &[EdgeId],
    ) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
            component: Some(component),
            edges: edges.to_vec(),
        }
    }

    /// Returns `true` when the error describes the caller's input rather than a library bug.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::NotApplicable(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
