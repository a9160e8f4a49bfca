use fixedbitset::FixedBitSet;
use tracing::trace;

use crate::{
    block_cut::internal_blocks,
    embedding_blocks::bridges::{bridge_path, find_bridges},
    graph_internal::GraphInternal,
};

/// Finds a cycle closed by the first back edge of a DFS, as
/// (start vertex, edges in walk order).
pub(crate) fn find_cycle(g: &GraphInternal) -> Option<(usize, Vec<usize>)> {
    let mut depth = vec![usize::MAX; g.n];
    let mut parent_edge = vec![usize::MAX; g.n];

    for root in 0..g.n {
        if depth[root] != usize::MAX {
            continue;
        }
        depth[root] = 0;
        let mut stack = vec![(root, 0usize)];

        while let Some(top) = stack.last_mut() {
            let (u, i) = *top;
            if i == g.adj[u].len() {
                stack.pop();
                continue;
            }
            top.1 += 1;

            let eid = g.adj[u][i];
            if eid == parent_edge[u] {
                continue;
            }
            let v = g.get_other_vertex(eid, u);
            if depth[v] == usize::MAX {
                depth[v] = depth[u] + 1;
                parent_edge[v] = eid;
                stack.push((v, 0));
            } else if depth[v] < depth[u] {
                // tree path v -> u closed by the back edge u -> v
                let mut edges = Vec::new();
                let mut w = u;
                while w != v {
                    edges.push(parent_edge[w]);
                    w = g.get_other_vertex(parent_edge[w], w);
                }
                edges.reverse();
                edges.push(eid);
                return Some((v, edges));
            }
        }
    }

    None
}

/// Vertices of the closed walk, without repeating the start.
pub(crate) fn walk_vertices(g: &GraphInternal, start: usize, edges: &[usize]) -> Vec<usize> {
    let mut vertices = Vec::with_capacity(edges.len());
    let mut at = start;
    for &eid in edges {
        vertices.push(at);
        at = g.get_other_vertex(eid, at);
    }
    vertices
}

/// Splits the face along a path joining two of its vertices.
fn split_face(face: &[usize], path: &[usize]) -> Option<(Vec<usize>, Vec<usize>)> {
    let len = face.len();
    let i = face.iter().position(|&v| v == path[0])?;
    let j = face.iter().position(|&v| v == path[path.len() - 1])?;
    let interior = &path[1..path.len() - 1];

    let arc = |from: usize, to: usize| {
        let mut ret = vec![face[from]];
        let mut k = from;
        while k != to {
            k = (k + 1) % len;
            ret.push(face[k]);
        }
        ret
    };

    let mut first = arc(i, j);
    first.extend(interior.iter().rev());
    let mut second = arc(j, i);
    second.extend_from_slice(interior);
    Some((first, second))
}

/// Embeds a simple biconnected graph in the plane, face by face: start from a
/// cycle, then repeatedly draw a path of a bridge inside a face that can hold
/// all of the bridge's attachments, preferring bridges with a single such face.
///
/// Returns the faces as cyclic vertex sequences, each edge walked once in
/// each direction, or `None` when some bridge fits in no face, which means the
/// graph is not planar.
pub(crate) fn embed(g: &GraphInternal) -> Option<Vec<Vec<usize>>> {
    let Some((start, cycle)) = find_cycle(g) else {
        return Some(Vec::new());
    };

    let mut in_h_vertex = vec![false; g.n];
    let mut in_h_edge = vec![false; g.m()];
    let cycle_vertices = walk_vertices(g, start, &cycle);
    for &v in &cycle_vertices {
        in_h_vertex[v] = true;
    }
    for &eid in &cycle {
        in_h_edge[eid] = true;
    }

    let mut faces = vec![cycle_vertices.clone(), cycle_vertices];
    faces[1].reverse();

    loop {
        let bridges = find_bridges(g, &in_h_vertex, &in_h_edge);
        if bridges.is_empty() {
            break;
        }

        let face_sets: Vec<FixedBitSet> = faces
            .iter()
            .map(|face| {
                let mut set = FixedBitSet::with_capacity(g.n);
                set.extend(face.iter().copied());
                set
            })
            .collect();

        let mut chosen = None;
        for (b, bridge) in bridges.iter().enumerate() {
            let mut admissible = (0..faces.len())
                .filter(|&f| bridge.attachments.iter().all(|&a| face_sets[f].contains(a)));
            let Some(first) = admissible.next() else {
                trace!(bridge = b, "bridge fits in no face");
                return None;
            };
            if admissible.next().is_none() {
                chosen = Some((b, first));
                break;
            }
            chosen.get_or_insert((b, first));
        }

        let (b, f) = chosen?;
        let (path, edges) = bridge_path(g, &bridges[b], &in_h_vertex);
        for &v in &path {
            in_h_vertex[v] = true;
        }
        for &eid in &edges {
            in_h_edge[eid] = true;
        }

        let (first, second) = split_face(&faces[f], &path)?;
        faces[f] = first;
        faces.push(second);
    }

    Some(faces)
}

/// Planarity of an arbitrary simple graph, block by block.
pub(crate) fn is_planar_internal(g: &GraphInternal) -> bool {
    internal_blocks(g).blocks.iter().all(|block| {
        let (local, _) = g.edge_subgraph(block);
        local.n < 5 || (local.m() <= 3 * local.n - 6 && embed(&local).is_some())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internal(n: usize, edges: &[(usize, usize)]) -> GraphInternal {
        let mut g = GraphInternal::new(n);
        for &(s, t) in edges {
            g.new_edge(s, t);
        }
        g
    }

    fn complete(n: usize) -> GraphInternal {
        let mut g = GraphInternal::new(n);
        for i in 0..n {
            for j in i + 1..n {
                g.new_edge(i, j);
            }
        }
        g
    }

    /// Every edge is walked exactly once in each direction and Euler's formula holds.
    fn check_faces(g: &GraphInternal, faces: &[Vec<usize>]) {
        assert_eq!(faces.len() + g.n, g.m() + 2);
        let mut darts = Vec::new();
        for face in faces {
            for k in 0..face.len() {
                darts.push((face[k], face[(k + 1) % face.len()]));
            }
        }
        darts.sort();
        let mut expected: Vec<_> = g.edges.iter().flat_map(|&(s, t)| [(s, t), (t, s)]).collect();
        expected.sort();
        assert_eq!(darts, expected);
    }

    #[test]
    fn test_first_cycle() {
        let g = internal(5, &[(0, 1), (1, 2), (2, 3), (3, 1), (3, 4)]);
        let (start, edges) = find_cycle(&g).unwrap();
        assert_eq!(start, 1);
        assert_eq!(edges, vec![1, 2, 3]);
        assert_eq!(walk_vertices(&g, start, &edges), vec![1, 2, 3]);
        assert!(find_cycle(&internal(3, &[(0, 1), (1, 2)])).is_none());
    }

    #[test]
    fn test_planar_faces() {
        let k4 = complete(4);
        let faces = embed(&k4).unwrap();
        assert_eq!(faces.len(), 4);
        check_faces(&k4, &faces);

        let cube = internal(
            8,
            &[
                (0, 1), (1, 2), (2, 3), (3, 0),
                (4, 5), (5, 6), (6, 7), (7, 4),
                (0, 4), (1, 5), (2, 6), (3, 7),
            ],
        );
        let faces = embed(&cube).unwrap();
        check_faces(&cube, &faces);
        assert!(faces.iter().all(|f| f.len() == 4));
    }

    #[test]
    fn test_non_planar() {
        assert!(embed(&complete(5)).is_none());

        let k33 = internal(
            6,
            &[(0, 3), (0, 4), (0, 5), (1, 3), (1, 4), (1, 5), (2, 3), (2, 4), (2, 5)],
        );
        assert!(embed(&k33).is_none());
        assert!(!is_planar_internal(&k33));
    }

    #[test]
    fn test_planarity_by_blocks() {
        // two K4s sharing vertex 3
        let mut g = GraphInternal::new(7);
        for base in [0, 3] {
            for i in base..base + 4 {
                for j in i + 1..base + 4 {
                    g.new_edge(i, j);
                }
            }
        }
        assert_eq!(g.m(), 12);
        assert!(is_planar_internal(&g));

        // K5 with a triangle hanging off vertex 4
        let mut g = GraphInternal::new(7);
        for i in 0..5 {
            for j in i + 1..5 {
                g.new_edge(i, j);
            }
        }
        for &(s, t) in &[(4, 5), (5, 6), (6, 4)] {
            g.new_edge(s, t);
        }
        assert!(!is_planar_internal(&g));

        assert!(is_planar_internal(&internal(3, &[(0, 1)])));
    }
}
