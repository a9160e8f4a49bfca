use std::collections::VecDeque;

use petgraph::graph::{NodeIndex, UnGraph};
use tracing::debug;

use crate::{
    Graph, Path,
    error::{Error, Result},
};

/// A segment of the graph relative to the cycle: the walk itself and the
/// positions on the cycle where it touches it, sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterlacementVertex {
    pub path: Path,
    pub attachments: Vec<usize>,
}

/// Why two segments cannot lie on the same side of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterlacementEdge {
    /// The segments share at least three attachments.
    SharedAttachments,
    /// Attachments of the segments alternate around the cycle.
    Alternating,
}

/// Side of the cycle a segment is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Inside,
    Outside,
}

impl Side {
    pub fn flip(self) -> Self {
        match self {
            Side::Inside => Side::Outside,
            Side::Outside => Side::Inside,
        }
    }
}

/// Outcome of 2-colouring the interlacement graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Orientation {
    /// A side for every segment, no two interlacing segments share a side.
    Consistent(Vec<Side>),
    /// Segments forming an odd cycle of interlacing pairs, in cycle order.
    Obstructed(Vec<usize>),
}

impl Orientation {
    pub fn is_consistent(&self) -> bool {
        matches!(self, Orientation::Consistent(_))
    }
}

/// Conflict graph of segments relative to a cycle.
///
/// Vertex `i` of the graph is the `i`-th segment passed to [`Interlacement::new`].
#[derive(Debug, Clone)]
pub struct Interlacement {
    cycle: Path,
    graph: UnGraph<InterlacementVertex, InterlacementEdge>,
}

impl Interlacement {
    /// Builds the interlacement graph of `segments` relative to `cycle`.
    ///
    /// `cycle` must be a closed walk visiting no vertex twice. Every edge of
    /// the cycle and of the segments must belong to `graph`. A segment's
    /// attachments are its vertices that lie on the cycle.
    pub fn new<V>(graph: &Graph<V>, cycle: Path, segments: Vec<Path>) -> Result<Self> {
        if !cycle.is_simple_cycle() {
            return Err(Error::InvalidPath(
                "interlacement needs a cycle without repeated vertices".into(),
            ));
        }
        for path in std::iter::once(&cycle).chain(&segments) {
            check_walk(graph, path)?;
        }

        let mut position = vec![usize::MAX; graph.vertex_count()];
        for (i, v) in cycle.vertices()[..cycle.len()].iter().enumerate() {
            position[v.index()] = i;
        }

        let mut ret = Self {
            cycle,
            graph: UnGraph::with_capacity(segments.len(), 0),
        };

        for path in segments {
            let mut attachments: Vec<usize> = path
                .vertices()
                .iter()
                .map(|v| position[v.index()])
                .filter(|&p| p != usize::MAX)
                .collect();
            radsort::sort(&mut attachments);
            attachments.dedup();
            ret.graph.add_node(InterlacementVertex { path, attachments });
        }

        let k = ret.graph.node_count();
        for i in 0..k {
            for j in i + 1..k {
                if let Some(kind) = ret.conflict(i, j) {
                    ret.graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), kind);
                }
            }
        }

        debug!(
            segments = k,
            conflicts = ret.graph.edge_count(),
            "interlacement graph built"
        );

        Ok(ret)
    }

    fn conflict(&self, i: usize, j: usize) -> Option<InterlacementEdge> {
        let a = &self.graph[NodeIndex::new(i)].attachments;
        let b = &self.graph[NodeIndex::new(j)].attachments;

        let shared = a.iter().filter(|x| b.binary_search(x).is_ok()).count();
        if shared >= 3 {
            Some(InterlacementEdge::SharedAttachments)
        } else if !self.within_arc(a, b) {
            Some(InterlacementEdge::Alternating)
        } else {
            None
        }
    }

    /// Returns `true` when all of `b` lies on one closed arc between two
    /// consecutive attachments of `a`.
    fn within_arc(&self, a: &[usize], b: &[usize]) -> bool {
        if a.len() < 2 {
            return true;
        }
        let len = self.cycle.len();
        let offset = |from: usize, to: usize| (to + len - from) % len;

        (0..a.len()).any(|i| {
            let from = a[i];
            let to = a[(i + 1) % a.len()];
            let span = offset(from, to);
            b.iter().all(|&x| offset(from, x) <= span)
        })
    }

    pub fn cycle(&self) -> &Path {
        &self.cycle
    }

    pub fn segment_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn segment(&self, i: usize) -> &InterlacementVertex {
        &self.graph[NodeIndex::new(i)]
    }

    pub fn conflict_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` when segments `i` and `j` interlace.
    pub fn interlace(&self, i: usize, j: usize) -> bool {
        self.graph
            .find_edge(NodeIndex::new(i), NodeIndex::new(j))
            .is_some()
    }

    /// Segments interlacing with segment `i`, in increasing order.
    pub fn conflicts(&self, i: usize) -> Vec<usize> {
        let mut ret: Vec<usize> = self
            .graph
            .neighbors(NodeIndex::new(i))
            .map(|v| v.index())
            .collect();
        radsort::sort(&mut ret);
        ret
    }

    pub fn as_petgraph(&self) -> &UnGraph<InterlacementVertex, InterlacementEdge> {
        &self.graph
    }

    /// Puts every segment on a side of the cycle so that interlacing segments
    /// are on different sides, or finds an odd cycle of interlacing segments.
    pub fn orientation(&self) -> Orientation {
        let k = self.graph.node_count();
        let mut side: Vec<Option<Side>> = vec![None; k];
        let mut parent = vec![usize::MAX; k];
        let mut depth = vec![0usize; k];

        for root in 0..k {
            if side[root].is_some() {
                continue;
            }
            side[root] = Some(Side::Inside);
            let mut queue = VecDeque::from([root]);

            while let Some(u) = queue.pop_front() {
                for v in self.graph.neighbors(NodeIndex::new(u)).map(|v| v.index()) {
                    match side[v] {
                        None => {
                            side[v] = side[u].map(Side::flip);
                            parent[v] = u;
                            depth[v] = depth[u] + 1;
                            queue.push_back(v);
                        }
                        Some(s) if Some(s) == side[u] => {
                            return Orientation::Obstructed(odd_cycle(u, v, &parent, &depth));
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        Orientation::Consistent(side.into_iter().map(|s| s.unwrap_or(Side::Inside)).collect())
    }

    pub fn is_bipartite(&self) -> bool {
        self.orientation().is_consistent()
    }
}

/// Every vertex and edge of `path` belongs to `graph` and each edge joins the
/// vertices it is walked between.
fn check_walk<V>(graph: &Graph<V>, path: &Path) -> Result<()> {
    if let Some(&v) = path.vertices().iter().find(|&&v| !graph.contains_vertex(v)) {
        return Err(Error::UnknownVertex(v));
    }
    for (i, &e) in path.edges().iter().enumerate() {
        let (s, t) = graph.endpoints(e)?;
        let (x, y) = (path.vertices()[i], path.vertices()[i + 1]);
        if (s, t) != (x, y) && (s, t) != (y, x) {
            return Err(Error::InvalidPath(format!(
                "edge {e:?} does not join {x:?} and {y:?}"
            )));
        }
    }
    Ok(())
}

/// Closes the tree paths from `u` and `v` to their lowest common ancestor
/// with the edge `u`-`v`.
fn odd_cycle(mut u: usize, mut v: usize, parent: &[usize], depth: &[usize]) -> Vec<usize> {
    let mut from_u = vec![u];
    let mut from_v = vec![v];
    while depth[u] > depth[v] {
        u = parent[u];
        from_u.push(u);
    }
    while depth[v] > depth[u] {
        v = parent[v];
        from_v.push(v);
    }
    while u != v {
        u = parent[u];
        v = parent[v];
        from_u.push(u);
        from_v.push(v);
    }
    from_v.pop();
    from_u.extend(from_v.into_iter().rev());
    from_u
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        testing::graph_from,
        types::{EdgeId, VertexId},
    };

    /// Cycle 0..n plus the given chords.
    fn cycle_and_chords(n: usize, chords: &[(usize, usize)]) -> (Graph, Path, Vec<Path>) {
        let mut edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
        edges.extend_from_slice(chords);
        let g = graph_from(n, &edges);
        let cycle = Path::new(&g, VertexId::new(0), (0..n).map(EdgeId::new).collect()).unwrap();
        let segments = (n..n + chords.len())
            .map(|e| Path::from_edges(&g, vec![EdgeId::new(e)]).unwrap())
            .collect();
        (g, cycle, segments)
    }

    #[test]
    fn test_single_chord_is_consistent() {
        let (g, cycle, segments) = cycle_and_chords(6, &[(0, 3)]);
        let interlacement = Interlacement::new(&g, cycle, segments).unwrap();
        assert_eq!(interlacement.segment(0).attachments, vec![0, 3]);
        assert_eq!(interlacement.conflict_count(), 0);
        assert_eq!(
            interlacement.orientation(),
            Orientation::Consistent(vec![Side::Inside])
        );
    }

    #[test]
    fn test_crossing_chords_interlace() {
        let (g, cycle, segments) = cycle_and_chords(6, &[(0, 3), (1, 4), (3, 5), (0, 2)]);
        let interlacement = Interlacement::new(&g, cycle, segments).unwrap();

        assert!(interlacement.interlace(0, 1));
        assert!(!interlacement.interlace(0, 2)); // shares an endpoint
        assert!(!interlacement.interlace(0, 3));
        assert!(interlacement.interlace(1, 2));
        assert!(interlacement.interlace(1, 3));
        assert_eq!(interlacement.conflicts(1), vec![0, 2, 3]);

        match interlacement.orientation() {
            Orientation::Consistent(sides) => {
                assert_ne!(sides[0], sides[1]);
                assert_ne!(sides[1], sides[2]);
                assert_eq!(sides[0], sides[2]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_pentagram_is_obstructed() {
        let (g, cycle, segments) =
            cycle_and_chords(5, &[(0, 2), (1, 3), (2, 4), (3, 0), (4, 1)]);
        let interlacement = Interlacement::new(&g, cycle, segments).unwrap();
        assert_eq!(interlacement.conflict_count(), 5);

        match interlacement.orientation() {
            Orientation::Obstructed(odd) => {
                assert_eq!(odd.len() % 2, 1);
                for i in 0..odd.len() {
                    assert!(interlacement.interlace(odd[i], odd[(i + 1) % odd.len()]));
                }
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_three_shared_attachments() {
        // two stars, both hanging from 0, 2 and 4 of a hexagon
        let g = graph_from(
            8,
            &[
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 4),
                (4, 5),
                (5, 0),
                (6, 0),
                (6, 2),
                (6, 4),
                (7, 0),
                (7, 2),
                (7, 4),
            ],
        );
        let e = EdgeId::new;
        let cycle = Path::new(&g, VertexId::new(0), (0..6).map(e).collect()).unwrap();
        let star = |a: usize| {
            Path::new(&g, VertexId::new(0), vec![e(a), e(a + 1), e(a + 1), e(a + 2)]).unwrap()
        };
        let interlacement = Interlacement::new(&g, cycle, vec![star(6), star(9)]).unwrap();

        assert_eq!(interlacement.segment(1).attachments, vec![0, 2, 4]);
        assert_eq!(
            interlacement.as_petgraph().edge_weights().next(),
            Some(&InterlacementEdge::SharedAttachments)
        );
        assert!(interlacement.is_bipartite());
    }

    #[test]
    fn test_rejects_walks_of_another_graph() {
        let (g, cycle, _) = cycle_and_chords(4, &[]);
        let other = graph_from(10, &[(0, 1), (9, 8)]);

        // edge 1 exists in both graphs, vertex 9 only in the larger one
        let foreign = Path::new(&other, VertexId::new(9), vec![EdgeId::new(1)]).unwrap();
        assert!(matches!(
            Interlacement::new(&g, cycle.clone(), vec![foreign]),
            Err(Error::UnknownVertex(v)) if v == VertexId::new(9)
        ));

        // vertices exist but edge 1 of `g` joins 1 and 2
        let other = graph_from(4, &[(0, 3), (0, 2)]);
        let mismatched = Path::new(&other, VertexId::new(0), vec![EdgeId::new(1)]).unwrap();
        assert!(matches!(
            Interlacement::new(&g, cycle, vec![mismatched]),
            Err(Error::InvalidPath(_))
        ));
    }

    #[test]
    fn test_rejects_non_cycles() {
        let (g, _, segments) = cycle_and_chords(4, &[(0, 2)]);
        let open = Path::new(&g, VertexId::new(0), vec![EdgeId::new(0), EdgeId::new(1)]).unwrap();
        assert!(matches!(
            Interlacement::new(&g, open, segments),
            Err(Error::InvalidPath(_))
        ));
    }
}
