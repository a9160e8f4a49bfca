use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use tracing::{debug, warn};

use crate::{
    DecompositionOptions, Graph,
    block_cut::get_block_cut_tree,
    embedding::{Obstruction, Planarity, test_planarity},
    error::{Error, Precondition, Result},
    spqr_blocks::outside_structures::{NodeType, TreeNode},
    triconnected::{check_reference, decompose, get_split_components},
    triconnected_blocks::{
        help_graph::HelpGraph,
        outside_structures::{SplitComponentType, SplitComponents},
    },
    types::{EdgeData, EdgeId, EdgeLabel, VertexId},
};

/// Rooted SPQR tree of a biconnected graph.
///
/// Node `i` is built from component `i` of [`SpqrTree::components`]; the graph
/// that is a single edge has no components and is a lone Q node. The root is
/// the node holding the reference edge.
#[derive(Debug, Clone)]
pub struct SpqrTree {
    components: SplitComponents,
    nodes: Vec<TreeNode>,
    root: usize,
}

/// Computes the SPQR tree of a biconnected graph rooted at the node holding
/// `reference`. Components are always canonical.
pub fn get_spqr_tree<V>(
    graph: &Graph<V>,
    reference: EdgeId,
    options: &DecompositionOptions,
) -> Result<SpqrTree> {
    let components = get_split_components(graph, reference, &options.with_canonicalize(true))?;
    SpqrTree::assemble(components)
}

/// Like [`get_spqr_tree`], but only the block holding `reference` has to be
/// biconnected: every other edge is left out of the decomposition and listed
/// in [`SpqrTree::omitted_edges`].
pub fn get_proto_spqr_tree<V>(
    graph: &Graph<V>,
    reference: EdgeId,
    options: &DecompositionOptions,
) -> Result<SpqrTree> {
    check_reference(graph, reference)?;
    let bct = get_block_cut_tree(graph);
    let Some(block) = bct.block_of(reference) else {
        return Err(Precondition::SelfLoop(reference).into());
    };

    let mut in_block = FixedBitSet::with_capacity(graph.edge_count());
    in_block.extend(bct.blocks[block].iter().map(|e| e.index()));

    let mut help = HelpGraph::new(graph);
    for eid in in_block.zeroes() {
        help.suppress(eid);
    }
    if help.suppressed.count_ones(..) > 0 {
        warn!(
            omitted = help.suppressed.count_ones(..),
            blocks = bct.block_count,
            "graph is not biconnected, decomposing the block of the reference edge only"
        );
    }

    let components = decompose(help, reference, &options.with_canonicalize(true))?;
    SpqrTree::assemble(components)
}

impl SpqrTree {
    /// Links canonical components through their shared virtual edges.
    fn assemble(components: SplitComponents) -> Result<Self> {
        let reference = components.reference;

        if components.is_empty() {
            let nodes = vec![TreeNode {
                node_type: NodeType::Q,
                component: None,
                edges: vec![reference],
                virtual_edges: Vec::new(),
                parent: None,
                children: Vec::new(),
                parent_edge: None,
            }];
            debug!("single edge, lone Q node");
            return Ok(Self {
                components,
                nodes,
                root: 0,
            });
        }

        let root = components
            .component_of(reference)
            .ok_or_else(|| Error::invariant("reference edge is in no component"))?;

        let owners = components.virtual_owners();
        if let Some(v) = owners
            .iter()
            .position(|o| o.len() != 2 || o[0] == o[1])
        {
            return Err(Error::invariant(format!(
                "virtual edge {v} is not shared by two components"
            )));
        }

        let mut nodes: Vec<TreeNode> = components
            .components
            .iter()
            .enumerate()
            .map(|(i, c)| TreeNode {
                node_type: match c.component_type {
                    SplitComponentType::Series => NodeType::S,
                    SplitComponentType::Parallel => NodeType::P,
                    SplitComponentType::Rigid => NodeType::R,
                },
                component: Some(i),
                edges: c.edges.clone(),
                virtual_edges: c.virtual_edges.clone(),
                parent: None,
                children: Vec::new(),
                parent_edge: None,
            })
            .collect();

        let mut visited = vec![false; nodes.len()];
        visited[root] = true;
        let mut queue = VecDeque::from([root]);

        while let Some(u) = queue.pop_front() {
            for k in 0..nodes[u].virtual_edges.len() {
                let v = nodes[u].virtual_edges[k];
                if nodes[u].parent_edge == Some(v) {
                    continue;
                }
                let child = if owners[v][0] == u { owners[v][1] } else { owners[v][0] };
                if visited[child] {
                    return Err(Error::component_invariant(
                        "components form a cycle",
                        child,
                        &nodes[child].edges,
                    ));
                }
                visited[child] = true;
                nodes[child].parent = Some(u);
                nodes[child].parent_edge = Some(v);
                nodes[u].children.push(child);
                queue.push_back(child);
            }
        }

        if let Some(unreachable) = visited.iter().position(|&x| !x) {
            return Err(Error::component_invariant(
                "component not reachable from the root",
                unreachable,
                &nodes[unreachable].edges,
            ));
        }

        debug!(nodes = nodes.len(), root, "SPQR tree assembled");

        Ok(Self {
            components,
            nodes,
            root,
        })
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn node(&self, i: usize) -> &TreeNode {
        &self.nodes[i]
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn children(&self, i: usize) -> &[usize] {
        &self.nodes[i].children
    }

    pub fn parent(&self, i: usize) -> Option<usize> {
        self.nodes[i].parent
    }

    pub fn components(&self) -> &SplitComponents {
        &self.components
    }

    /// Real edges left out of a proto-tree, empty for a biconnected graph.
    pub fn omitted_edges(&self) -> &[EdgeId] {
        &self.components.omitted_edges
    }

    /// Nodes in depth-first order from the root, children in order.
    pub fn preorder(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(u) = stack.pop() {
            order.push(u);
            stack.extend(self.nodes[u].children.iter().rev());
        }
        order
    }

    /// Skeleton of node `i`: the vertices of its component, each carrying the
    /// vertex of the input graph, real edges first, then `Virtual` edges.
    pub fn skeleton(&self, i: usize) -> Result<Graph<VertexId>> {
        let node = self.nodes.get(i).ok_or(Error::UnknownNode(i))?;
        let mut endpoints = Vec::with_capacity(node.edges.len() + node.virtual_edges.len());
        for &e in &node.edges {
            let ends = self
                .components
                .real_endpoints(e)
                .ok_or(Error::UnknownEdge(e))?;
            endpoints.push((ends, EdgeLabel::Real));
        }
        for &v in &node.virtual_edges {
            let ends = self
                .components
                .virtual_endpoints(v)
                .ok_or_else(|| Error::invariant(format!("unknown virtual edge {v}")))?;
            endpoints.push((ends, EdgeLabel::Virtual));
        }

        let mut vertices: Vec<VertexId> = endpoints.iter().flat_map(|&((s, t), _)| [s, t]).collect();
        vertices.sort_unstable();
        vertices.dedup();

        let mut skeleton = Graph::with_capacity(vertices.len(), endpoints.len());
        for &v in &vertices {
            skeleton.add_vertex(v);
        }
        let local = |v: VertexId| VertexId::new(vertices.partition_point(|&x| x < v));
        for ((s, t), label) in endpoints {
            skeleton.add_edge_with(
                local(s),
                local(t),
                EdgeData {
                    label,
                    ..EdgeData::default()
                },
            )?;
        }

        Ok(skeleton)
    }

    /// A Kuratowski subgraph of the first non-planar R skeleton, in preorder.
    ///
    /// Series and parallel skeletons are always planar, so the decomposed
    /// graph is planar exactly when this returns `None`.
    pub fn obstruction(&self) -> Result<Option<(usize, Obstruction)>> {
        for i in self.preorder() {
            if self.nodes[i].node_type != NodeType::R {
                continue;
            }
            if let Planarity::NonPlanar(obstruction) = test_planarity(&self.skeleton(i)?)? {
                return Ok(Some((i, obstruction)));
            }
        }
        Ok(None)
    }

    fn write_node(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        u: usize,
        prefix: &str,
        last: bool,
    ) -> std::fmt::Result {
        let node = &self.nodes[u];
        let branch = match (u == self.root, last) {
            (true, _) => "",
            (false, true) => "└── ",
            (false, false) => "├── ",
        };
        writeln!(
            f,
            "{prefix}{branch}{} {u} (real {}, virtual {})",
            node.node_type,
            node.edges.len(),
            node.virtual_edges.len()
        )?;

        let prefix = match (u == self.root, last) {
            (true, _) => prefix.to_string(),
            (false, true) => format!("{prefix}    "),
            (false, false) => format!("{prefix}│   "),
        };
        for (k, &child) in node.children.iter().enumerate() {
            self.write_node(f, child, &prefix, k + 1 == node.children.len())?;
        }
        Ok(())
    }
}

impl std::fmt::Display for SpqrTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_node(f, self.root, "", true)
    }
}
