use fixedbitset::FixedBitSet;

use crate::{Graph, graph_internal::GraphInternal};

/// Tagged overlay over the immutable input graph.
///
/// Working edge `e < m` is the real edge with index `e`; working edge `e >= m`
/// is virtual edge `e - m`, created while splitting. Real edges marked in
/// `suppressed` take no part in the decomposition. The input graph itself is
/// never touched.
#[derive(Debug, Clone)]
pub(crate) struct HelpGraph {
    pub n: usize,
    pub m: usize,
    pub edges: Vec<(usize, usize)>,
    pub suppressed: FixedBitSet,
}

impl HelpGraph {
    pub fn new<V>(graph: &Graph<V>) -> Self {
        let base = GraphInternal::from_graph(graph);
        Self {
            n: base.n,
            m: base.m(),
            suppressed: FixedBitSet::with_capacity(base.m()),
            edges: base.edges,
        }
    }

    pub fn suppress(&mut self, eid: usize) {
        debug_assert!(eid < self.m);
        self.suppressed.insert(eid);
    }

    /// Real edges taking part in the decomposition.
    pub fn active_real_edges(&self) -> Vec<usize> {
        self.suppressed.zeroes().collect()
    }

    pub fn new_virtual_edge(&mut self, s: usize, t: usize) -> usize {
        self.edges.push((s, t));
        self.edges.len() - 1
    }

    pub fn is_virtual(&self, eid: usize) -> bool {
        eid >= self.m
    }

    pub fn virtual_index(&self, eid: usize) -> usize {
        eid - self.m
    }

    pub fn virtual_count(&self) -> usize {
        self.edges.len() - self.m
    }

    /// Endpoints with the smaller vertex first.
    pub fn normalized(&self, eid: usize) -> (usize, usize) {
        let (s, t) = self.edges[eid];
        (s.min(t), s.max(t))
    }
}
