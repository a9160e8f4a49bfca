use hashbrown::HashSet;

use crate::{Graph, graph_internal::GraphInternal, types::EdgeId};

/// Simple view of a graph: parallel edges collapsed to their first copy,
/// self-loops dropped. Vertex `i` is the vertex with index `i` of the input.
#[derive(Debug, Clone)]
pub(crate) struct SimpleGraph {
    pub graph: GraphInternal,
    pub original: Vec<EdgeId>, // simple edge -> edge of the input graph
}

impl SimpleGraph {
    pub fn new<V>(graph: &Graph<V>) -> Self {
        let full = GraphInternal::from_graph(graph);
        let mut seen = HashSet::with_capacity(full.m());
        let mut ret = Self {
            graph: GraphInternal::new(full.n),
            original: Vec::new(),
        };

        for (eid, &(s, t)) in full.edges.iter().enumerate() {
            if s == t || !seen.insert((s.min(t), s.max(t))) {
                continue;
            }
            ret.graph.new_edge(s, t);
            ret.original.push(EdgeId::new(eid));
        }

        ret
    }

    /// Maps simple edges back to edges of the input graph.
    pub fn to_original(&self, edges: &[usize]) -> Vec<EdgeId> {
        edges.iter().map(|&e| self.original[e]).collect()
    }
}
