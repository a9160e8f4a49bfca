use crate::{
    Graph,
    testing::graph_from,
    types::{EdgeId, VertexId},
};

/// Edges of the fan graph, vertices labelled 1..=10 (vertex `k` has id `k - 1`).
const FAN_EDGES: [(usize, usize); 13] = [
    (1, 2),
    (1, 3),
    (2, 4),
    (4, 3),
    (1, 7),
    (4, 5),
    (7, 6),
    (6, 5),
    (6, 8),
    (8, 10),
    (6, 9),
    (8, 9),
    (5, 9),
];

fn labelled(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::with_capacity(n, edges.len());
    for label in 1..=n {
        graph.add_vertex(label as u32);
    }
    for &(s, t) in edges {
        graph
            .add_edge(VertexId::new(s - 1), VertexId::new(t - 1))
            .expect("fixture vertices exist");
    }
    graph
}

/// Path with a fan: ten vertices, thirteen edges. Vertex 10 hangs off vertex 8.
pub fn fan_graph() -> Graph {
    labelled(10, &FAN_EDGES)
}

/// [`fan_graph`] with the extra edge 3-2, which closes the triangle 1-2-3.
pub fn fan_graph_with_triangle() -> Graph {
    let mut graph = fan_graph();
    graph
        .add_edge(VertexId::new(2), VertexId::new(1))
        .expect("fixture vertices exist");
    graph
}

/// Four vertices labelled 1..=4 with edges 1-2, 1-3, 2-4, 3-2, 1-4.
pub fn diamond_graph() -> Graph {
    labelled(4, &[(1, 2), (1, 3), (2, 4), (3, 2), (1, 4)])
}

/// First edge joining the vertices labelled `u` and `v` in a labelled fixture.
pub fn labelled_edge(graph: &Graph, u: usize, v: usize) -> EdgeId {
    graph
        .edges_between(VertexId::new(u - 1), VertexId::new(v - 1))
        .expect("fixture vertices exist")[0]
}

pub fn cycle_graph(n: usize) -> Graph {
    let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    graph_from(n, &edges)
}

/// Cycle `0..n` with the chord 0-(n/2).
pub fn cycle_with_chord(n: usize) -> Graph {
    let mut edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    edges.push((0, n / 2));
    graph_from(n, &edges)
}

pub fn complete_graph(n: usize) -> Graph {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            edges.push((i, j));
        }
    }
    graph_from(n, &edges)
}

/// Complete bipartite graph, left side `0..a`, right side `a..a + b`.
pub fn complete_bipartite_graph(a: usize, b: usize) -> Graph {
    let mut edges = Vec::new();
    for i in 0..a {
        for j in 0..b {
            edges.push((i, a + j));
        }
    }
    graph_from(a + b, &edges)
}

/// Replaces every edge by a path of `times + 1` edges.
pub fn subdivided(graph: &Graph, times: usize) -> Graph {
    let mut ret = Graph::new();
    for v in graph.vertices() {
        ret.add_vertex(v.index() as u32);
    }
    for e in graph.edges() {
        let (mut last, t) = graph.endpoints(e).expect("edge exists");
        for _ in 0..times {
            let mid = ret.add_vertex(ret.vertex_count() as u32);
            ret.add_edge(last, mid).expect("vertices exist");
            last = mid;
        }
        ret.add_edge(last, t).expect("vertices exist");
    }
    ret
}

pub fn petersen_graph() -> Graph {
    let mut edges = Vec::new();
    for i in 0..5 {
        edges.push((i, (i + 1) % 5));
        edges.push((i, i + 5));
        edges.push((i + 5, (i + 2) % 5 + 5));
    }
    graph_from(10, &edges)
}

/// Triangular prism: two triangles 0-1-2 and 3-4-5 joined by 0-3, 1-4, 2-5.
pub fn prism_graph() -> Graph {
    graph_from(
        6,
        &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (0, 3), (1, 4), (2, 5)],
    )
}
