use crate::{
    Graph,
    error::{Precondition, Result},
    graph_internal::GraphInternal,
    types::{EdgeId, VertexId},
};

/// Represents the block-cut structure of a graph: its blocks and cut vertices.
#[derive(Debug, Clone)]
pub struct BlockCutTree {
    /// Number of blocks in the graph.
    pub block_count: usize,
    /// Number of cut vertices in the graph.
    pub cut_count: usize,
    /// Number of connected components, isolated vertices included.
    pub component_count: usize,
    /// Blocks of the graph, each given by its edges. Self-loops belong to no block.
    pub blocks: Vec<Vec<EdgeId>>,
    /// Cut vertices in increasing index order.
    pub cut_vertices: Vec<VertexId>,
}

impl BlockCutTree {
    /// Index of the block that contains `e`.
    pub fn block_of(&self, e: EdgeId) -> Option<usize> {
        self.blocks.iter().position(|block| block.contains(&e))
    }
}

pub(crate) struct InternalBlocks {
    pub blocks: Vec<Vec<usize>>,
    pub is_cut: Vec<bool>,
    pub roots: usize,
}

/// Returns the lowest preorder vertex reachable from subtree of u [lowpoint].
fn dfs(
    graph: &GraphInternal,
    u: usize,
    parent_edge: Option<usize>,
    time: &mut usize,
    preorder: &mut [usize],
    vertex_stack: &mut Vec<usize>,
    // block is defined by set of edges, this way we avoid problem with cut vertices multi membership
    blocks: &mut Vec<Vec<usize>>,
    is_cut: &mut [bool],
) -> usize {
    preorder[u] = *time;
    *time += 1;
    let mut low = preorder[u];
    let mut is_potential_cut = parent_edge.is_some();
    vertex_stack.push(u);

    for &eid in &graph.adj[u] {
        if Some(eid) == parent_edge {
            continue;
        }
        let v = graph.get_other_vertex(eid, u);
        if preorder[v] == usize::MAX {
            let low_v = dfs(
                graph,
                v,
                Some(eid),
                time,
                preorder,
                vertex_stack,
                blocks,
                is_cut,
            );
            low = low.min(low_v);
            if low_v >= preorder[u] && is_potential_cut {
                is_cut[u] = true;
            }
            // if in root this will handle >2 dfs tree children case
            is_potential_cut = true;
        } else {
            // back edge, or a parallel copy of the parent edge
            low = low.min(preorder[v]);
        }
    }

    if let Some(pe) = parent_edge {
        let parent = graph.get_other_vertex(pe, u);
        if low >= preorder[parent] {
            let mut block = Vec::new();
            while let Some(w) = vertex_stack.pop() {
                // every edge is taken at its endpoint discovered later, self-loops never
                block.extend(
                    graph.adj[w]
                        .iter()
                        .copied()
                        .filter(|&e| preorder[w] > preorder[graph.get_other_vertex(e, w)]),
                );
                if w == u {
                    break;
                }
            }
            block.sort_unstable();
            blocks.push(block);
        }
    }

    low
}

pub(crate) fn internal_blocks(graph: &GraphInternal) -> InternalBlocks {
    let mut time = 0;
    let mut preorder = vec![usize::MAX; graph.n];
    let mut vertex_stack = Vec::with_capacity(graph.n);
    let mut is_cut = vec![false; graph.n];
    let mut blocks = Vec::new();
    let mut roots = 0;

    for u in 0..graph.n {
        if preorder[u] == usize::MAX {
            roots += 1;
            dfs(
                graph,
                u,
                None,
                &mut time,
                &mut preorder,
                &mut vertex_stack,
                &mut blocks,
                &mut is_cut,
            );
            vertex_stack.clear();
        }
    }

    InternalBlocks {
        blocks,
        is_cut,
        roots,
    }
}

/// Computes the biconnected components (blocks) and cut vertices of the graph.
pub fn get_block_cut_tree<V>(graph: &Graph<V>) -> BlockCutTree {
    let internal = GraphInternal::from_graph(graph);
    let InternalBlocks {
        blocks,
        is_cut,
        roots,
    } = internal_blocks(&internal);

    let cut_vertices: Vec<VertexId> = is_cut
        .iter()
        .enumerate()
        .filter(|&(_, &cut)| cut)
        .map(|(u, _)| VertexId::new(u))
        .collect();

    BlockCutTree {
        block_count: blocks.len(),
        cut_count: cut_vertices.len(),
        component_count: roots,
        blocks: blocks
            .into_iter()
            .map(|block| block.into_iter().map(EdgeId::new).collect())
            .collect(),
        cut_vertices,
    }
}

/// Checks that the graph has at least two vertices, is connected and has no cut vertex.
pub fn check_biconnected<V>(graph: &Graph<V>) -> Result<()> {
    let n = graph.vertex_count();
    if n < 2 {
        return Err(Precondition::TooFewVertices(n).into());
    }

    let bct = get_block_cut_tree(graph);
    if bct.component_count > 1 {
        return Err(Precondition::Disconnected.into());
    }
    if let Some(&v) = bct.cut_vertices.first() {
        return Err(Precondition::NotBiconnected(v).into());
    }

    Ok(())
}

pub fn is_biconnected<V>(graph: &Graph<V>) -> bool {
    check_biconnected(graph).is_ok()
}

pub fn list_cut_vertices<V>(graph: &Graph<V>) -> Vec<VertexId> {
    get_block_cut_tree(graph).cut_vertices
}

/// Copies the given edges and their endpoints into a fresh graph.
///
/// Vertex contents are cloned; vertices are numbered in order of first
/// appearance in `edges`.
pub fn extract_subgraph<V: Clone>(graph: &Graph<V>, edges: &[EdgeId]) -> Result<Graph<V>> {
    let mut ret = Graph::with_capacity(0, edges.len());
    let mut mapping = vec![None; graph.vertex_count()];

    for &e in edges {
        let (s, t) = graph.endpoints(e)?;
        let mut local = [s, t];
        for v in local.iter_mut() {
            let slot = &mut mapping[v.index()];
            *v = match *slot {
                Some(mapped) => mapped,
                None => {
                    let mapped = ret.add_vertex(graph.content(*v)?.clone());
                    *slot = Some(mapped);
                    mapped
                }
            };
        }
        ret.add_weighted_edge(local[0], local[1], graph.weight(e)?)?;
    }

    Ok(ret)
}

/// Returns every block of the graph as a graph of its own.
pub fn list_biconnected_components<V: Clone>(graph: &Graph<V>) -> Result<Vec<Graph<V>>> {
    get_block_cut_tree(graph)
        .blocks
        .iter()
        .map(|block| extract_subgraph(graph, block))
        .collect()
}
