use fixedbitset::FixedBitSet;
use petgraph::visit::EdgeRef;
use radsort::sort_by_key;

use crate::{
    error::{Error, Result},
    types::{EdgeData, EdgeId, EdgeLabel, VertexId},
};

/// Undirected multigraph with stable integer handles.
///
/// Vertices and edges live in petgraph's arenas and are never removed, so a
/// [`VertexId`] or [`EdgeId`] handed out once stays valid for the lifetime of
/// the graph. Iteration follows insertion order. Parallel edges and
/// self-loops are stored as given.
///
/// Every edge keeps the orientation it was created with: [`Graph::origin`]
/// and [`Graph::destination`] return the endpoints in that order even though
/// adjacency is undirected.
#[derive(Debug, Clone)]
pub struct Graph<V = u32> {
    inner: petgraph::graph::UnGraph<V, EdgeData>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Graph<V> {
    pub fn new() -> Self {
        Self {
            inner: petgraph::graph::UnGraph::default(),
        }
    }

    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            inner: petgraph::graph::UnGraph::with_capacity(vertices, edges),
        }
    }

    pub fn add_vertex(&mut self, content: V) -> VertexId {
        self.inner.add_node(content)
    }

    /// Adds an edge of weight 1 from `origin` to `destination`.
    pub fn add_edge(&mut self, origin: VertexId, destination: VertexId) -> Result<EdgeId> {
        self.add_edge_with(origin, destination, EdgeData::default())
    }

    pub fn add_weighted_edge(
        &mut self,
        origin: VertexId,
        destination: VertexId,
        weight: i32,
    ) -> Result<EdgeId> {
        self.add_edge_with(
            origin,
            destination,
            EdgeData {
                weight,
                label: EdgeLabel::Real,
            },
        )
    }

    pub(crate) fn add_edge_with(
        &mut self,
        origin: VertexId,
        destination: VertexId,
        data: EdgeData,
    ) -> Result<EdgeId> {
        self.check_vertex(origin)?;
        self.check_vertex(destination)?;
        Ok(self.inner.add_edge(origin, destination, data))
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.inner.node_indices()
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.inner.edge_indices()
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v.index() < self.inner.node_count()
    }

    pub fn contains_edge(&self, e: EdgeId) -> bool {
        e.index() < self.inner.edge_count()
    }

    pub fn content(&self, v: VertexId) -> Result<&V> {
        self.inner.node_weight(v).ok_or(Error::UnknownVertex(v))
    }

    pub fn endpoints(&self, e: EdgeId) -> Result<(VertexId, VertexId)> {
        self.inner.edge_endpoints(e).ok_or(Error::UnknownEdge(e))
    }

    pub fn origin(&self, e: EdgeId) -> Result<VertexId> {
        Ok(self.endpoints(e)?.0)
    }

    pub fn destination(&self, e: EdgeId) -> Result<VertexId> {
        Ok(self.endpoints(e)?.1)
    }

    /// Returns the endpoint of `e` that is not `v` (or `v` itself for a self-loop).
    pub fn opposite(&self, e: EdgeId, v: VertexId) -> Result<VertexId> {
        let (s, t) = self.endpoints(e)?;
        if s == v {
            Ok(t)
        } else if t == v {
            Ok(s)
        } else {
            Err(Error::UnknownVertex(v))
        }
    }

    pub fn weight(&self, e: EdgeId) -> Result<i32> {
        self.data(e).map(|d| d.weight)
    }

    pub fn label(&self, e: EdgeId) -> Result<EdgeLabel> {
        self.data(e).map(|d| d.label)
    }

    fn data(&self, e: EdgeId) -> Result<&EdgeData> {
        self.inner.edge_weight(e).ok_or(Error::UnknownEdge(e))
    }

    /// Edges incident to `v`, in insertion order. A self-loop is listed once.
    pub fn incident_edges(&self, v: VertexId) -> Result<Vec<EdgeId>> {
        self.check_vertex(v)?;
        let mut edges: Vec<EdgeId> = self.inner.edges(v).map(|e| e.id()).collect();
        sort_by_key(&mut edges, |e| e.index());
        edges.dedup();
        Ok(edges)
    }

    /// Number of edge ends at `v`; a self-loop counts twice.
    pub fn degree(&self, v: VertexId) -> Result<usize> {
        let mut degree = 0;
        for e in self.incident_edges(v)? {
            let (s, t) = self.endpoints(e)?;
            degree += if s == t { 2 } else { 1 };
        }
        Ok(degree)
    }

    /// All vertices reachable from `v` over one edge, each listed once.
    ///
    /// Contains `v` itself when `v` carries a self-loop.
    pub fn adjacent_vertices(&self, v: VertexId) -> Result<Vec<VertexId>> {
        let mut seen = FixedBitSet::with_capacity(self.vertex_count());
        let mut ret = Vec::new();
        for e in self.incident_edges(v)? {
            let to = self.opposite(e, v)?;
            if !seen.put(to.index()) {
                ret.push(to);
            }
        }
        Ok(ret)
    }

    /// All (parallel) edges joining `u` and `v`, in insertion order.
    pub fn edges_between(&self, u: VertexId, v: VertexId) -> Result<Vec<EdgeId>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let mut edges: Vec<EdgeId> = self.inner.edges_connecting(u, v).map(|e| e.id()).collect();
        sort_by_key(&mut edges, |e| e.index());
        edges.dedup();
        Ok(edges)
    }

    pub fn has_self_loops(&self) -> bool {
        self.first_self_loop().is_some()
    }

    pub(crate) fn first_self_loop(&self) -> Option<EdgeId> {
        self.inner
            .edge_references()
            .find(|e| e.source() == e.target())
            .map(|e| e.id())
    }

    /// See [`crate::block_cut::is_biconnected`].
    pub fn is_biconnected(&self) -> bool {
        crate::block_cut::is_biconnected(self)
    }

    /// Read-only access to the underlying petgraph storage.
    pub fn as_petgraph(&self) -> &petgraph::graph::UnGraph<V, EdgeData> {
        &self.inner
    }

    fn check_vertex(&self, v: VertexId) -> Result<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(Error::UnknownVertex(v))
        }
    }
}
