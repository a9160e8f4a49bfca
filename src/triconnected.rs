use tracing::{debug, trace};

use crate::{
    DecompositionOptions, Graph,
    block_cut::check_biconnected,
    error::{Precondition, Result},
    graph_internal::GraphInternal,
    triconnected_blocks::{
        fragment::{Fragment, separation_partners},
        handle_duplicate_edges::handle_duplicate_edges,
        help_graph::HelpGraph,
        outside_structures::{Component, SplitComponentType, SplitComponents},
    },
    types::{EdgeId, VertexId},
};

pub(crate) fn check_reference<V>(graph: &Graph<V>, reference: EdgeId) -> Result<()> {
    if !graph.contains_edge(reference) {
        return Err(Precondition::ReferenceEdgeMissing(reference).into());
    }
    Ok(())
}

/// Recursively splits the fragments at separation pairs until every fragment
/// is a bond, a cycle or triconnected.
fn find_components(help: &mut HelpGraph, edges: Vec<usize>) -> Vec<Component> {
    let mut split_components = Vec::new();

    let fragment = Fragment::new(help, edges);
    if fragment.vertices.len() == 2 {
        // a single edge stays a Q node, two or more form one bond
        if fragment.edges.len() >= 2 {
            split_components.push(Component::new(
                SplitComponentType::Parallel,
                fragment.edges,
            ));
        }
        return split_components;
    }

    let mut work = vec![fragment.edges];
    while let Some(edges) = work.pop() {
        let edges = handle_duplicate_edges(help, edges, &mut split_components);
        let fragment = Fragment::new(help, edges);

        if fragment.is_cycle() {
            split_components.push(Component::new(SplitComponentType::Series, fragment.edges));
            continue;
        }

        match fragment.find_separation_pair() {
            None => {
                split_components.push(Component::new(SplitComponentType::Rigid, fragment.edges));
            }
            Some((a, b)) => {
                let (s, t) = (fragment.vertices[a], fragment.vertices[b]);
                let (mut first, mut second) = fragment.split(a, b);
                let evirt = help.new_virtual_edge(s, t);
                trace!(
                    s,
                    t,
                    first = first.len(),
                    second = second.len(),
                    "split at separation pair"
                );

                first.push(evirt);
                second.push(evirt);
                work.push(second);
                work.push(first);
            }
        }
    }

    split_components
}

/// Decomposes the non-suppressed edges of the overlay.
pub(crate) fn decompose(
    mut help: HelpGraph,
    reference: EdgeId,
    options: &DecompositionOptions,
) -> Result<SplitComponents> {
    let active = help.active_real_edges();
    let raw = find_components(&mut help, active);

    let mut split_components = SplitComponents::from_raw(&help, raw, reference);
    if options.canonicalize {
        split_components.canonicalize();
    }
    if options.verify {
        split_components.verify()?;
    }

    let (s, p, r) = split_components.type_counts();
    debug!(
        series = s,
        parallel = p,
        rigid = r,
        virtual_edges = split_components.virtual_edges.len(),
        "split components ready"
    );

    Ok(split_components)
}

/// Computes the split components of a biconnected multigraph.
///
/// The graph must contain `reference`, have no self-loops, at least two
/// vertices, and be biconnected; otherwise [`Error::NotApplicable`] is
/// returned. A graph with a single edge yields no components at all, a graph
/// with two vertices and several edges a single Parallel component.
///
/// Separation pairs are taken in lexicographic order of vertex indices.
/// With `options.canonicalize` the result is the unique set of triconnected
/// components; with `options.verify` the result is checked before it is
/// returned.
///
/// [`Error::NotApplicable`]: crate::Error::NotApplicable
pub fn get_split_components<V>(
    graph: &Graph<V>,
    reference: EdgeId,
    options: &DecompositionOptions,
) -> Result<SplitComponents> {
    check_reference(graph, reference)?;
    if let Some(e) = graph.first_self_loop() {
        return Err(Precondition::SelfLoop(e).into());
    }
    check_biconnected(graph)?;

    decompose(HelpGraph::new(graph), reference, options)
}

/// Lists all split pairs of a biconnected graph: pairs of vertices whose
/// removal disconnects the graph, and pairs joined by two or more edges.
///
/// Pairs are ordered, smaller vertex first, and sorted.
pub fn separation_pairs<V>(graph: &Graph<V>) -> Result<Vec<(VertexId, VertexId)>> {
    check_biconnected(graph)?;

    let internal = GraphInternal::from_graph(graph);
    let mut pairs = Vec::new();

    for a in 0..internal.n {
        let mut partners = separation_partners(&internal, a);

        let mut multiplicity = vec![0usize; internal.n];
        for &eid in &internal.adj[a] {
            let b = internal.get_other_vertex(eid, a);
            if b > a {
                multiplicity[b] += 1;
            }
        }
        partners.extend((a + 1..internal.n).filter(|&b| multiplicity[b] > 1));

        radsort::sort(&mut partners);
        partners.dedup();
        pairs.extend(
            partners
                .into_iter()
                .map(|b| (VertexId::new(a), VertexId::new(b))),
        );
    }

    Ok(pairs)
}
