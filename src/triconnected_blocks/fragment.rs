use std::collections::VecDeque;

use crate::{
    block_cut::internal_blocks, graph_internal::GraphInternal,
    triconnected_blocks::help_graph::HelpGraph,
};

/// A piece of the graph still waiting to be classified, with a local
/// adjacency view. Local vertex `i` is `vertices[i]`, local edge `j` is the
/// working edge `edges[j]`.
pub(crate) struct Fragment {
    pub edges: Vec<usize>,
    pub vertices: Vec<usize>,
    pub local: GraphInternal,
}

impl Fragment {
    pub fn new(help: &HelpGraph, edges: Vec<usize>) -> Self {
        let mut vertices: Vec<usize> = edges
            .iter()
            .flat_map(|&eid| {
                let (s, t) = help.edges[eid];
                [s, t]
            })
            .collect();
        radsort::sort(&mut vertices);
        vertices.dedup();

        // vertices are sorted, so local order agrees with global order
        let local_of = |v: usize| vertices.partition_point(|&x| x < v);

        let mut local = GraphInternal::new(vertices.len());
        for &eid in &edges {
            let (s, t) = help.edges[eid];
            local.new_edge(local_of(s), local_of(t));
        }

        Self {
            edges,
            vertices,
            local,
        }
    }

    pub fn is_cycle(&self) -> bool {
        self.local.n >= 3 && self.local.adj.iter().all(|adj| adj.len() == 2)
    }

    /// Lexicographically smallest separation pair, in local vertices.
    ///
    /// The fragment must be biconnected.
    pub fn find_separation_pair(&self) -> Option<(usize, usize)> {
        (0..self.local.n).find_map(|a| {
            separation_partners(&self.local, a)
                .into_iter()
                .next()
                .map(|b| (a, b))
        })
    }

    /// Splits the fragment at the separation pair `{a, b}`.
    ///
    /// The first part holds the edges touching the piece of the fragment
    /// without `a` and `b` that contains the lowest vertex, the second part
    /// holds the rest (edges joining `a` and `b` directly included).
    pub fn split(&self, a: usize, b: usize) -> (Vec<usize>, Vec<usize>) {
        let mut in_piece = vec![false; self.local.n];
        let mut queue = VecDeque::new();

        if let Some(start) = (0..self.local.n).find(|&v| v != a && v != b) {
            in_piece[start] = true;
            queue.push_back(start);
        }
        while let Some(u) = queue.pop_front() {
            for &eid in &self.local.adj[u] {
                let v = self.local.get_other_vertex(eid, u);
                if v != a && v != b && !in_piece[v] {
                    in_piece[v] = true;
                    queue.push_back(v);
                }
            }
        }

        let (mut first, mut second) = (Vec::new(), Vec::new());
        for (j, &(s, t)) in self.local.edges.iter().enumerate() {
            if in_piece[s] || in_piece[t] {
                first.push(self.edges[j]);
            } else {
                second.push(self.edges[j]);
            }
        }
        (first, second)
    }
}

/// All vertices `b > a` such that `{a, b}` separates the (biconnected) graph.
pub(crate) fn separation_partners(graph: &GraphInternal, a: usize) -> Vec<usize> {
    let mut without = GraphInternal::new(graph.n);
    for &(s, t) in &graph.edges {
        if s != a && t != a {
            without.new_edge(s, t);
        }
    }

    // a cut vertex of the graph without `a` pairs with `a`
    internal_blocks(&without)
        .is_cut
        .iter()
        .enumerate()
        .skip(a + 1)
        .filter(|&(_, &cut)| cut)
        .map(|(b, _)| b)
        .collect()
}
