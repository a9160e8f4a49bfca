use crate::triconnected_blocks::{
    help_graph::HelpGraph,
    outside_structures::{Component, SplitComponentType},
};

/// Replaces every bundle of parallel edges of the fragment by one fresh
/// virtual edge. Each bundle, together with its virtual edge, becomes a
/// Parallel component.
///
/// Returns the edges of the fragment after the replacement.
pub(crate) fn handle_duplicate_edges(
    help: &mut HelpGraph,
    edges: Vec<usize>,
    split_components: &mut Vec<Component>,
) -> Vec<usize> {
    // stable sort by normalized endpoints, bundles end up next to each other
    let n = help.n;
    let mut keyed: Vec<(usize, usize)> = edges
        .into_iter()
        .map(|eid| {
            let (s, t) = help.normalized(eid);
            (s * n + t, eid)
        })
        .collect();
    radsort::sort_by_key(&mut keyed, |&(key, _)| key);

    let mut ret = Vec::with_capacity(keyed.len());
    let mut i = 0;
    let len = keyed.len();

    while i < len {
        let mut j = i + 1;
        while j < len && keyed[j].0 == keyed[i].0 {
            j += 1;
        }

        if j - i == 1 {
            ret.push(keyed[i].1);
        } else {
            let (s, t) = help.normalized(keyed[i].1);
            let evirt = help.new_virtual_edge(s, t);

            let mut bundle: Vec<usize> = keyed[i..j].iter().map(|&(_, eid)| eid).collect();
            bundle.push(evirt);
            split_components.push(Component::new(SplitComponentType::Parallel, bundle));

            ret.push(evirt);
        }

        i = j;
    }

    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Graph, types::VertexId};

    #[test]
    fn test_bundles_become_parallel_components() {
        let mut g = Graph::new();
        for i in 0..3 {
            g.add_vertex(i);
        }
        let v = |i| VertexId::new(i);
        g.add_edge(v(0), v(1)).unwrap();
        g.add_edge(v(1), v(2)).unwrap();
        g.add_edge(v(1), v(0)).unwrap();
        g.add_edge(v(2), v(0)).unwrap();
        g.add_edge(v(0), v(1)).unwrap();

        let mut help = HelpGraph::new(&g);
        let mut components = Vec::new();
        let edges = handle_duplicate_edges(&mut help, (0..5).collect(), &mut components);

        assert_eq!(components.len(), 1);
        assert_eq!(components[0].component_type, SplitComponentType::Parallel);
        assert_eq!(components[0].edges, vec![0, 2, 4, 5]);
        assert_eq!(edges, vec![5, 3, 1]);
        assert_eq!(help.edges[5], (0, 1));
    }

    #[test]
    fn test_simple_fragment_is_unchanged() {
        let mut g = Graph::new();
        for i in 0..3 {
            g.add_vertex(i);
        }
        g.add_edge(VertexId::new(0), VertexId::new(1)).unwrap();
        g.add_edge(VertexId::new(1), VertexId::new(2)).unwrap();
        g.add_edge(VertexId::new(2), VertexId::new(0)).unwrap();

        let mut help = HelpGraph::new(&g);
        let mut components = Vec::new();
        let edges = handle_duplicate_edges(&mut help, vec![2, 0, 1], &mut components);

        assert!(components.is_empty());
        assert_eq!(help.virtual_count(), 0);
        let mut sorted = edges.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 2]);
    }
}
