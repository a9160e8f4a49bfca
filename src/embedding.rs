use tracing::debug;

pub use crate::embedding_blocks::kuratowski::KuratowskiKind;
use crate::{
    Graph, Path,
    block_cut::check_biconnected,
    embedding_blocks::{
        bridges::{bridge_walk, find_bridges},
        faces::{embed, find_cycle, is_planar_internal, walk_vertices},
        kuratowski::get_counterexample,
        structures::SimpleGraph,
    },
    error::{Error, Result},
    interlacement::{Interlacement, Orientation, Side},
    types::{EdgeId, VertexId},
};

/// Faces of a plane drawing together with the interlacement evidence.
#[derive(Debug, Clone)]
pub struct PlanarEmbedding {
    /// Faces as cyclic vertex sequences; every edge of the simple graph is
    /// walked once in each direction.
    pub faces: Vec<Vec<VertexId>>,
    /// Bridges relative to the first cycle found, `None` when the graph has no cycle.
    pub interlacement: Option<Interlacement>,
    /// Side of the cycle each bridge is drawn on.
    pub sides: Vec<Side>,
}

/// A subdivision of K5 or K3,3 contained in the graph.
#[derive(Debug, Clone)]
pub struct Obstruction {
    pub kind: KuratowskiKind,
    pub edges: Vec<EdgeId>,
    pub branch_vertices: Vec<VertexId>,
    /// Branch paths relative to a cycle through all branch vertices.
    pub interlacement: Interlacement,
    /// Odd cycle of the interlacement graph, as segment indices.
    pub odd_cycle: Vec<usize>,
}

#[derive(Debug, Clone)]
pub enum Planarity {
    Planar(PlanarEmbedding),
    NonPlanar(Obstruction),
}

impl Planarity {
    pub fn is_planar(&self) -> bool {
        matches!(self, Planarity::Planar(_))
    }
}

fn to_path<V>(graph: &Graph<V>, simple: &SimpleGraph, start: usize, edges: &[usize]) -> Result<Path> {
    Path::new(graph, VertexId::new(start), simple.to_original(edges))
}

/// Tests a biconnected graph for planarity. Parallel edges and self-loops are
/// ignored.
///
/// A planar graph comes with its faces and a consistent side for every bridge
/// of a cycle. A non-planar graph comes with a Kuratowski subdivision whose
/// branch paths interlace along an odd cycle.
pub fn test_planarity<V>(graph: &Graph<V>) -> Result<Planarity> {
    check_biconnected(graph)?;
    let simple = SimpleGraph::new(graph);
    let g = &simple.graph;

    let Some(faces) = embed(g) else {
        return non_planar(graph, &simple).map(Planarity::NonPlanar);
    };

    let Some((start, cycle)) = find_cycle(g) else {
        // a single edge
        let (s, t) = g.edges[0];
        debug!("planar, single edge");
        return Ok(Planarity::Planar(PlanarEmbedding {
            faces: vec![vec![VertexId::new(s), VertexId::new(t)]],
            interlacement: None,
            sides: Vec::new(),
        }));
    };

    let mut in_h_vertex = vec![false; g.n];
    let mut in_h_edge = vec![false; g.m()];
    for v in walk_vertices(g, start, &cycle) {
        in_h_vertex[v] = true;
    }
    for &eid in &cycle {
        in_h_edge[eid] = true;
    }

    let segments = find_bridges(g, &in_h_vertex, &in_h_edge)
        .iter()
        .map(|bridge| {
            let (from, edges) = bridge_walk(g, bridge, &in_h_vertex);
            to_path(graph, &simple, from, &edges)
        })
        .collect::<Result<Vec<_>>>()?;

    let interlacement = Interlacement::new(graph, to_path(graph, &simple, start, &cycle)?, segments)?;
    let Orientation::Consistent(sides) = interlacement.orientation() else {
        return Err(Error::invariant(
            "bridges of a planar graph interlace along an odd cycle",
        ));
    };

    debug!(faces = faces.len(), bridges = sides.len(), "planar");

    Ok(Planarity::Planar(PlanarEmbedding {
        faces: faces
            .into_iter()
            .map(|face| face.into_iter().map(VertexId::new).collect())
            .collect(),
        interlacement: Some(interlacement),
        sides,
    }))
}

fn non_planar<V>(graph: &Graph<V>, simple: &SimpleGraph) -> Result<Obstruction> {
    let sub = get_counterexample(&simple.graph)
        .ok_or_else(|| Error::invariant("no Kuratowski subgraph in a non-planar graph"))?;

    let (start, cycle) = &sub.cycle;
    let segments = sub
        .segments
        .iter()
        .map(|(from, edges)| to_path(graph, simple, *from, edges))
        .collect::<Result<Vec<_>>>()?;
    let interlacement = Interlacement::new(graph, to_path(graph, simple, *start, cycle)?, segments)?;

    let Orientation::Obstructed(odd_cycle) = interlacement.orientation() else {
        return Err(Error::invariant(
            "branch paths of a Kuratowski subgraph have a consistent orientation",
        ));
    };

    debug!(kind = %sub.kind, edges = sub.edges.len(), "non-planar");

    Ok(Obstruction {
        kind: sub.kind,
        edges: simple.to_original(&sub.edges),
        branch_vertices: sub.branch_vertices.into_iter().map(VertexId::new).collect(),
        interlacement,
        odd_cycle,
    })
}

/// Planarity of any graph, block by block.
pub fn is_planar<V>(graph: &Graph<V>) -> bool {
    is_planar_internal(&SimpleGraph::new(graph).graph)
}
