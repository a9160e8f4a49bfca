use crate::Graph;

/// Plain adjacency-list view used by the algorithms.
///
/// Vertices are `0..n`, edges are indices into `edges`. A self-loop is stored
/// once in the adjacency list of its vertex.
#[derive(Debug, Clone, Default)]
pub(crate) struct GraphInternal {
    pub n: usize,                   // number of vertices
    pub adj: Vec<Vec<usize>>,       // adjacency list, edges are stored as indices in `edges`
    pub edges: Vec<(usize, usize)>, // edges in the form (source, target)
}

impl GraphInternal {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            adj: vec![Vec::new(); n],
            edges: Vec::new(),
        }
    }

    /// Mirrors `graph`: vertex `i` is `VertexId::new(i)`, edge `j` is `EdgeId::new(j)`.
    pub fn from_graph<V>(graph: &Graph<V>) -> Self {
        let mut ret = Self::new(graph.vertex_count());
        for (s, t) in graph
            .as_petgraph()
            .raw_edges()
            .iter()
            .map(|e| (e.source().index(), e.target().index()))
        {
            ret.new_edge(s, t);
        }
        ret
    }

    pub fn m(&self) -> usize {
        self.edges.len()
    }

    pub fn new_edge(&mut self, s: usize, t: usize) -> usize {
        let eid = self.edges.len();
        self.edges.push((s, t));
        self.adj[s].push(eid);
        if s != t {
            self.adj[t].push(eid);
        }
        eid
    }

    /// Compact graph on the endpoints of `edges`. Local edge `j` is `edges[j]`,
    /// local vertex `i` is the `i`-th returned vertex; vertices keep their order.
    pub fn edge_subgraph(&self, edges: &[usize]) -> (Self, Vec<usize>) {
        let mut vertices: Vec<usize> = edges
            .iter()
            .flat_map(|&eid| {
                let (s, t) = self.edges[eid];
                [s, t]
            })
            .collect();
        radsort::sort(&mut vertices);
        vertices.dedup();

        let mut ret = Self::new(vertices.len());
        for &eid in edges {
            let (s, t) = self.edges[eid];
            ret.new_edge(
                vertices.partition_point(|&x| x < s),
                vertices.partition_point(|&x| x < t),
            );
        }
        (ret, vertices)
    }

    pub fn get_other_vertex(&self, eid: usize, u: usize) -> usize {
        let (s, t) = self.edges[eid];
        if s == u { t } else { s }
    }
}
