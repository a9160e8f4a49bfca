use crate::{
    triconnected_blocks::help_graph::HelpGraph,
    types::{EdgeId, VertexId},
};

/// Represents the type of a component in the triconnected decomposition.
///
/// - `Series`: a simple cycle
/// - `Parallel`: a bond, two vertices joined by parallel edges
/// - `Rigid`: a simple triconnected graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitComponentType {
    Series,
    Parallel,
    Rigid,
}

impl std::fmt::Display for SplitComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitComponentType::Series => write!(f, "S"),
            SplitComponentType::Parallel => write!(f, "P"),
            SplitComponentType::Rigid => write!(f, "R"),
        }
    }
}

/// Represents a component in the triconnected decomposition.
///
/// `edges` are real edges of the input graph, `virtual_edges` index into
/// [`SplitComponents::virtual_edges`]. Both lists are kept sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitComponent {
    pub component_type: SplitComponentType,
    pub edges: Vec<EdgeId>,
    pub virtual_edges: Vec<usize>,
}

impl SplitComponent {
    /// Number of edges of the skeleton, real and virtual.
    pub fn size(&self) -> usize {
        self.edges.len() + self.virtual_edges.len()
    }
}

/// Component as produced by the extractor, over working edge ids of a [`HelpGraph`].
#[derive(Debug, Clone)]
pub(crate) struct Component {
    pub component_type: SplitComponentType,
    pub edges: Vec<usize>,
}

impl Component {
    pub fn new(component_type: SplitComponentType, edges: Vec<usize>) -> Self {
        Self {
            component_type,
            edges,
        }
    }
}

/// Holds the split components of a graph.
///
/// - `components`: the components, canonical once [`SplitComponents::canonicalize`] ran.
/// - `virtual_edges`: endpoints of every virtual edge, indexed by virtual edge id.
/// - `reference`: the reference edge the decomposition was asked for.
/// - `real_to_component`: for every real edge of the input graph, the component holding it.
/// - `omitted_edges`: real edges that were not decomposed (outside the reference edge's block).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitComponents {
    pub components: Vec<SplitComponent>,
    pub virtual_edges: Vec<(VertexId, VertexId)>,
    pub reference: EdgeId,
    pub real_to_component: Vec<Option<usize>>,
    pub omitted_edges: Vec<EdgeId>,
    pub(crate) real_edges: Vec<(VertexId, VertexId)>,
}

impl SplitComponents {
    pub(crate) fn from_raw(help: &HelpGraph, raw: Vec<Component>, reference: EdgeId) -> Self {
        let to_vertices = |&(s, t): &(usize, usize)| (VertexId::new(s), VertexId::new(t));

        let components = raw
            .into_iter()
            .map(|c| {
                let (mut edges, mut virtual_edges) = (Vec::new(), Vec::new());
                for eid in c.edges {
                    if help.is_virtual(eid) {
                        virtual_edges.push(help.virtual_index(eid));
                    } else {
                        edges.push(EdgeId::new(eid));
                    }
                }
                edges.sort_unstable();
                virtual_edges.sort_unstable();
                SplitComponent {
                    component_type: c.component_type,
                    edges,
                    virtual_edges,
                }
            })
            .collect();

        let mut ret = Self {
            components,
            virtual_edges: help.edges[help.m..].iter().map(to_vertices).collect(),
            reference,
            real_to_component: Vec::new(),
            omitted_edges: help.suppressed.ones().map(EdgeId::new).collect(),
            real_edges: help.edges[..help.m].iter().map(to_vertices).collect(),
        };
        ret.update_real_to_component();
        ret
    }

    pub(crate) fn update_real_to_component(&mut self) {
        self.real_to_component = vec![None; self.real_edges.len()];
        for (i, c) in self.components.iter().enumerate() {
            for e in &c.edges {
                self.real_to_component[e.index()] = Some(i);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component that holds the real edge `e`.
    pub fn component_of(&self, e: EdgeId) -> Option<usize> {
        self.real_to_component.get(e.index()).copied().flatten()
    }

    pub fn real_endpoints(&self, e: EdgeId) -> Option<(VertexId, VertexId)> {
        self.real_edges.get(e.index()).copied()
    }

    pub fn virtual_endpoints(&self, v: usize) -> Option<(VertexId, VertexId)> {
        self.virtual_edges.get(v).copied()
    }

    /// Endpoints of all skeleton edges of component `i`, real edges first.
    pub fn skeleton_endpoints(&self, i: usize) -> Vec<(VertexId, VertexId)> {
        let c = &self.components[i];
        c.edges
            .iter()
            .map(|e| self.real_edges[e.index()])
            .chain(c.virtual_edges.iter().map(|&v| self.virtual_edges[v]))
            .collect()
    }

    /// Vertices of component `i`, in increasing index order.
    pub fn vertices(&self, i: usize) -> Vec<VertexId> {
        let mut vertices: Vec<usize> = self
            .skeleton_endpoints(i)
            .into_iter()
            .flat_map(|(s, t)| [s.index(), t.index()])
            .collect();
        radsort::sort(&mut vertices);
        vertices.dedup();
        vertices.into_iter().map(VertexId::new).collect()
    }

    /// For every virtual edge, the components that contain it.
    pub fn virtual_owners(&self) -> Vec<Vec<usize>> {
        let mut owners = vec![Vec::new(); self.virtual_edges.len()];
        for (i, c) in self.components.iter().enumerate() {
            for &v in &c.virtual_edges {
                owners[v].push(i);
            }
        }
        owners
    }

    /// Number of components of each type, as (series, parallel, rigid).
    pub fn type_counts(&self) -> (usize, usize, usize) {
        self.components
            .iter()
            .fold((0, 0, 0), |(s, p, r), c| match c.component_type {
                SplitComponentType::Series => (s + 1, p, r),
                SplitComponentType::Parallel => (s, p + 1, r),
                SplitComponentType::Rigid => (s, p, r + 1),
            })
    }
}
