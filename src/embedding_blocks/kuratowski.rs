use hashbrown::HashMap;
use tracing::debug;

use crate::{embedding_blocks::faces::is_planar_internal, graph_internal::GraphInternal};

/// The two minimal non-planar graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KuratowskiKind {
    K5,
    K33,
}

impl std::fmt::Display for KuratowskiKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KuratowskiKind::K5 => write!(f, "K5"),
            KuratowskiKind::K33 => write!(f, "K3,3"),
        }
    }
}

/// Path between two branch vertices through vertices of degree two.
#[derive(Debug, Clone)]
struct BranchPath {
    from: usize,
    edges: Vec<usize>,
}

/// A subdivision of K5 or K3,3 inside a simple graph, split into a cycle
/// through all branch vertices and the branch paths off that cycle.
#[derive(Debug, Clone)]
pub(crate) struct KuratowskiSubgraph {
    pub kind: KuratowskiKind,
    pub edges: Vec<usize>,
    pub branch_vertices: Vec<usize>,
    pub cycle: (usize, Vec<usize>),
    pub segments: Vec<(usize, Vec<usize>)>,
}

/// Given a non-planar graph, extracts its Kuratowski subgraph by dropping every
/// edge whose removal keeps the graph non-planar. Works in O(m) planarity tests.
pub(crate) fn get_counterexample(g: &GraphInternal) -> Option<KuratowskiSubgraph> {
    let mut keep = vec![true; g.m()];

    let kept_graph = |keep: &[bool]| {
        let mut sub = GraphInternal::new(g.n);
        for (eid, &(s, t)) in g.edges.iter().enumerate() {
            if keep[eid] {
                sub.new_edge(s, t);
            }
        }
        sub
    };

    if is_planar_internal(g) {
        return None;
    }
    for eid in 0..g.m() {
        keep[eid] = false;
        if is_planar_internal(&kept_graph(&keep)) {
            keep[eid] = true;
        }
    }

    let edges: Vec<usize> = (0..g.m()).filter(|&eid| keep[eid]).collect();
    let mut adj = vec![Vec::new(); g.n];
    for &eid in &edges {
        let (s, t) = g.edges[eid];
        adj[s].push(eid);
        adj[t].push(eid);
    }

    let branch_vertices: Vec<usize> = (0..g.n).filter(|&v| adj[v].len() >= 3).collect();
    let kind = match (branch_vertices.len(), adj.iter().map(Vec::len).max()) {
        (5, Some(4)) => KuratowskiKind::K5,
        (6, Some(3)) => KuratowskiKind::K33,
        _ => return None,
    };

    // branch paths, keyed by their (smaller, larger) ends
    let mut paths: HashMap<(usize, usize), BranchPath> = HashMap::new();
    for &b in &branch_vertices {
        for &first in &adj[b] {
            let mut edges = vec![first];
            let mut at = g.get_other_vertex(first, b);
            while adj[at].len() == 2 {
                let last = edges[edges.len() - 1];
                let next = if adj[at][0] == last { adj[at][1] } else { adj[at][0] };
                edges.push(next);
                at = g.get_other_vertex(next, at);
            }
            if b < at {
                paths.insert((b, at), BranchPath { from: b, edges });
            }
        }
    }

    // walk of the branch path from `x` to `y`
    let walk = |x: usize, y: usize| -> Option<Vec<usize>> {
        let path = paths.get(&(x.min(y), x.max(y)))?;
        let mut edges = path.edges.clone();
        if path.from != x {
            edges.reverse();
        }
        Some(edges)
    };

    let b = &branch_vertices;
    let (cycle_order, chords): (Vec<usize>, Vec<(usize, usize)>) = match kind {
        KuratowskiKind::K5 => (
            b.clone(),
            vec![(b[0], b[2]), (b[0], b[3]), (b[1], b[3]), (b[1], b[4]), (b[2], b[4])],
        ),
        KuratowskiKind::K33 => {
            let (left, right): (Vec<usize>, Vec<usize>) = b
                .iter()
                .partition(|&&v| v == b[0] || !paths.contains_key(&(b[0].min(v), b[0].max(v))));
            if left.len() != 3 || right.len() != 3 {
                return None;
            }
            (
                vec![left[0], right[0], left[1], right[1], left[2], right[2]],
                vec![(left[0], right[1]), (left[1], right[2]), (left[2], right[0])],
            )
        }
    };

    let mut cycle = Vec::new();
    for i in 0..cycle_order.len() {
        cycle.extend(walk(cycle_order[i], cycle_order[(i + 1) % cycle_order.len()])?);
    }
    let segments = chords
        .into_iter()
        .map(|(x, y)| walk(x, y).map(|edges| (x, edges)))
        .collect::<Option<Vec<_>>>()?;

    debug!(%kind, edges = edges.len(), "extracted Kuratowski subgraph");

    Some(KuratowskiSubgraph {
        kind,
        edges,
        cycle: (cycle_order[0], cycle),
        branch_vertices,
        segments,
    })
}
