use crate::types::EdgeId;

/// Type of a node of the SPQR tree.
///
/// - `Q`: a single real edge, only used for the graph that is one edge
/// - `S`: a cycle
/// - `P`: a bond
/// - `R`: a triconnected skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Q,
    S,
    P,
    R,
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeType::Q => write!(f, "Q"),
            NodeType::S => write!(f, "S"),
            NodeType::P => write!(f, "P"),
            NodeType::R => write!(f, "R"),
        }
    }
}

/// Node of a rooted SPQR tree.
///
/// - `component`: index into [`SplitComponents::components`](crate::triconnected_blocks::outside_structures::SplitComponents), `None` for a Q node.
/// - `edges`: real edges of the skeleton.
/// - `virtual_edges`: virtual edges of the skeleton, each shared with exactly one neighbouring node.
/// - `parent_edge`: the virtual edge shared with `parent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub node_type: NodeType,
    pub component: Option<usize>,
    pub edges: Vec<EdgeId>,
    pub virtual_edges: Vec<usize>,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    pub parent_edge: Option<usize>,
}

impl TreeNode {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
