use crate::{
    Graph,
    error::{Error, Result},
    types::{EdgeId, VertexId},
};

/// A non-empty walk: a sequence of edges where consecutive edges share a vertex.
///
/// `vertices()` has one more element than `edges()`; the i-th edge joins the
/// i-th and (i+1)-th vertex. The direction of traversal is stored in the
/// vertex sequence, so an edge may be walked against its own orientation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    edges: Vec<EdgeId>,
    vertices: Vec<VertexId>,
}

impl Path {
    /// Builds the walk that starts at `start` and follows `edges` in order.
    pub fn new<V>(graph: &Graph<V>, start: VertexId, edges: Vec<EdgeId>) -> Result<Self> {
        if edges.is_empty() {
            return Err(Error::InvalidPath("a path needs at least one edge".into()));
        }
        if !graph.contains_vertex(start) {
            return Err(Error::UnknownVertex(start));
        }

        let mut vertices = Vec::with_capacity(edges.len() + 1);
        vertices.push(start);
        let mut at = start;
        for &e in &edges {
            let (s, t) = graph.endpoints(e)?;
            at = if s == at {
                t
            } else if t == at {
                s
            } else {
                return Err(Error::InvalidPath(format!(
                    "edge {e:?} does not touch {at:?}"
                )));
            };
            vertices.push(at);
        }

        Ok(Self { edges, vertices })
    }

    /// Builds a walk from its edges alone, picking the starting vertex that
    /// makes the sequence connected.
    pub fn from_edges<V>(graph: &Graph<V>, edges: Vec<EdgeId>) -> Result<Self> {
        let first = *edges
            .first()
            .ok_or_else(|| Error::InvalidPath("a path needs at least one edge".into()))?;
        let (s, t) = graph.endpoints(first)?;
        if edges.len() == 1 {
            return Self::new(graph, s, edges);
        }

        let (x, y) = graph.endpoints(edges[1])?;
        let start = if t == x || t == y { s } else { t };
        Self::new(graph, start, edges)
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn start(&self) -> VertexId {
        self.vertices[0]
    }

    pub fn end(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    pub fn is_cyclic(&self) -> bool {
        self.start() == self.end()
    }

    pub fn contains_edge(&self, e: EdgeId) -> bool {
        self.edges.contains(&e)
    }

    /// Vertices of the walk without repetitions, in order of first visit.
    pub fn unique_vertices(&self) -> Vec<VertexId> {
        let mut ret: Vec<VertexId> = Vec::with_capacity(self.vertices.len());
        for &v in &self.vertices {
            if !ret.contains(&v) {
                ret.push(v);
            }
        }
        ret
    }

    /// Returns `true` when some edge is walked more than once.
    pub fn contains_duplicates(&self) -> bool {
        let mut sorted: Vec<usize> = self.edges.iter().map(|e| e.index()).collect();
        radsort::sort(&mut sorted);
        sorted.windows(2).any(|w| w[0] == w[1])
    }

    /// Returns `true` for a closed walk that visits no vertex twice.
    pub fn is_simple_cycle(&self) -> bool {
        self.is_cyclic() && self.unique_vertices().len() == self.edges.len()
    }
}
