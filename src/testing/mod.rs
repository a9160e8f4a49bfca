pub(crate) mod fixtures;
pub(crate) mod graph_enumerator;
pub(crate) mod grids;
pub(crate) mod random_graphs;

use crate::{Graph, types::VertexId};

/// Builds a graph on vertices `0..n` from an edge list.
pub(crate) fn graph_from(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::with_capacity(n, edges.len());
    for i in 0..n {
        graph.add_vertex(i as u32);
    }
    for &(s, t) in edges {
        graph
            .add_edge(VertexId::new(s), VertexId::new(t))
            .expect("test edge endpoints exist");
    }
    graph
}
