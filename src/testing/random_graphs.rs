use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{Graph, block_cut::{extract_subgraph, get_block_cut_tree}, types::VertexId};

/// Random connected multigraph: a random spanning tree plus `m - n + 1`
/// random edges (self-loops and parallel edges included).
pub fn random_graph(n: usize, m: usize, seed: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = Graph::with_capacity(n, m);

    for i in 0..n {
        graph.add_vertex(i as u32);
        if i > 0 {
            let j = rng.random_range(0..i);
            graph
                .add_edge(VertexId::new(i), VertexId::new(j))
                .expect("vertices exist");
        }
    }

    for _ in n - 1..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        graph
            .add_edge(VertexId::new(s), VertexId::new(t))
            .expect("vertices exist");
    }

    graph
}

/// The first block of [`random_graph`], as a graph of its own. Has no self-loops.
pub fn random_biconnected_graph(n: usize, m: usize, seed: usize) -> Graph {
    let graph = random_graph(n, m, seed);

    let bct = get_block_cut_tree(&graph);

    extract_subgraph(&graph, &bct.blocks[0]).expect("block edges belong to the graph")
}

/// Random simple graph with every pair joined with probability `p`.
pub fn random_simple_graph(n: usize, p: f64, seed: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = Graph::with_capacity(n, 0);
    for i in 0..n {
        graph.add_vertex(i as u32);
    }
    for i in 0..n {
        for j in i + 1..n {
            if rng.random_bool(p) {
                graph
                    .add_edge(VertexId::new(i), VertexId::new(j))
                    .expect("vertices exist");
            }
        }
    }
    graph
}
