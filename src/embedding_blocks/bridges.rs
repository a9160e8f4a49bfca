use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::graph_internal::GraphInternal;

/// A bridge of the graph relative to an embedded subgraph H: either a chord
/// (an edge outside H joining two vertices of H), or a connected piece of the
/// graph outside H together with the edges attaching it to H.
#[derive(Debug, Clone)]
pub(crate) struct Bridge {
    pub edges: Vec<usize>,
    pub inner: Vec<usize>,       // vertices outside H, empty for a chord
    pub attachments: Vec<usize>, // vertices of H, sorted
}

pub(crate) fn find_bridges(g: &GraphInternal, in_h_vertex: &[bool], in_h_edge: &[bool]) -> Vec<Bridge> {
    let mut bridges = Vec::new();

    for (eid, &(s, t)) in g.edges.iter().enumerate() {
        if !in_h_edge[eid] && in_h_vertex[s] && in_h_vertex[t] {
            bridges.push(Bridge {
                edges: vec![eid],
                inner: Vec::new(),
                attachments: vec![s.min(t), s.max(t)],
            });
        }
    }

    let mut visited = FixedBitSet::with_capacity(g.n);
    let mut edge_seen = FixedBitSet::with_capacity(g.m());
    let mut attached = FixedBitSet::with_capacity(g.n);

    for root in 0..g.n {
        if in_h_vertex[root] || visited.contains(root) || g.adj[root].is_empty() {
            continue;
        }

        let mut bridge = Bridge {
            edges: Vec::new(),
            inner: Vec::new(),
            attachments: Vec::new(),
        };
        attached.clear();
        visited.insert(root);
        let mut queue = VecDeque::from([root]);

        while let Some(u) = queue.pop_front() {
            bridge.inner.push(u);
            for &eid in &g.adj[u] {
                if !edge_seen.put(eid) {
                    bridge.edges.push(eid);
                }
                let v = g.get_other_vertex(eid, u);
                if in_h_vertex[v] {
                    if !attached.put(v) {
                        bridge.attachments.push(v);
                    }
                } else if !visited.put(v) {
                    queue.push_back(v);
                }
            }
        }

        radsort::sort(&mut bridge.attachments);
        bridges.push(bridge);
    }

    bridges
}

/// Path through the bridge from its first to its second attachment, as
/// (vertices, edges).
pub(crate) fn bridge_path(g: &GraphInternal, bridge: &Bridge, in_h_vertex: &[bool]) -> (Vec<usize>, Vec<usize>) {
    let (a1, a2) = (bridge.attachments[0], bridge.attachments[1]);
    if bridge.inner.is_empty() {
        return (vec![a1, a2], bridge.edges.clone());
    }

    let mut prev_edge = vec![usize::MAX; g.n];
    let mut queue = VecDeque::new();
    for &eid in &bridge.edges {
        let (s, t) = g.edges[eid];
        let x = if s == a1 { t } else if t == a1 { s } else { continue };
        if !in_h_vertex[x] && prev_edge[x] == usize::MAX {
            prev_edge[x] = eid;
            queue.push_back(x);
        }
    }

    let mut last = None;
    'search: while let Some(u) = queue.pop_front() {
        for &eid in &g.adj[u] {
            let v = g.get_other_vertex(eid, u);
            if v == a2 {
                last = Some((u, eid));
                break 'search;
            }
            if !in_h_vertex[v] && prev_edge[v] == usize::MAX {
                prev_edge[v] = eid;
                queue.push_back(v);
            }
        }
    }

    let mut vertices = vec![a2];
    let mut edges = Vec::new();
    if let Some((mut u, eid)) = last {
        edges.push(eid);
        loop {
            vertices.push(u);
            let pe = prev_edge[u];
            edges.push(pe);
            u = g.get_other_vertex(pe, u);
            if u == a1 {
                break;
            }
        }
        vertices.push(a1);
    }
    vertices.reverse();
    edges.reverse();
    (vertices, edges)
}

/// Closed walk through the bridge that touches every attachment, as
/// (start vertex, edges). Edges may repeat.
pub(crate) fn bridge_walk(g: &GraphInternal, bridge: &Bridge, in_h_vertex: &[bool]) -> (usize, Vec<usize>) {
    let Some(&root) = bridge.inner.first() else {
        return (bridge.attachments[0], bridge.edges.clone());
    };

    fn walk(u: usize, g: &GraphInternal, in_h_vertex: &[bool], visited: &mut FixedBitSet, edges: &mut Vec<usize>) {
        visited.insert(u);
        for &eid in &g.adj[u] {
            let v = g.get_other_vertex(eid, u);
            if in_h_vertex[v] {
                // to the attachment and back
                edges.push(eid);
                edges.push(eid);
            } else if !visited.contains(v) {
                edges.push(eid);
                walk(v, g, in_h_vertex, visited, edges);
                edges.push(eid);
            }
        }
    }

    let mut visited = FixedBitSet::with_capacity(g.n);
    let mut edges = Vec::new();
    walk(root, g, in_h_vertex, &mut visited, &mut edges);
    (root, edges)
}
