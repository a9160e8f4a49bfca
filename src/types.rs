/// Handle of a vertex inside a [`Graph`](crate::Graph).
pub type VertexId = petgraph::graph::NodeIndex;

/// Handle of an edge inside a [`Graph`](crate::Graph).
pub type EdgeId = petgraph::graph::EdgeIndex;

/// Enum representing the type of edge in a graph.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum EdgeLabel {
    #[default]
    Real,
    Virtual,
}

impl std::fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeLabel::Real => write!(f, "Real"),
            EdgeLabel::Virtual => write!(f, "Virtual"),
        }
    }
}

/// Data stored on every edge of a [`Graph`](crate::Graph).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EdgeData {
    pub weight: i32,
    pub label: EdgeLabel,
}

impl Default for EdgeData {
    fn default() -> Self {
        Self {
            weight: 1,
            label: EdgeLabel::Real,
        }
    }
}
