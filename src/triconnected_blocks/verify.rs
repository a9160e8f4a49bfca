use crate::{
    block_cut::internal_blocks,
    error::{Error, Result},
    graph_internal::GraphInternal,
    triconnected_blocks::outside_structures::{SplitComponentType, SplitComponents},
    types::EdgeId,
};

impl SplitComponents {
    /// Checks the shape of every component and the edge bookkeeping.
    ///
    /// - Parallel: two vertices, at least three edges (two for a lone bond).
    /// - Series: a single simple cycle on at least three vertices.
    /// - Rigid: at least four vertices.
    /// - every decomposed real edge sits in exactly one component,
    ///   every virtual edge in exactly two.
    pub fn verify(&self) -> Result<()> {
        let lone = self.components.len() == 1;

        for (i, c) in self.components.iter().enumerate() {
            let vertices = self.vertices(i);
            let fail = |reason: &str| Err(Error::component_invariant(reason, i, &c.edges));

            match c.component_type {
                SplitComponentType::Parallel => {
                    if vertices.len() != 2 {
                        return fail("parallel component must have exactly two vertices");
                    }
                    if c.size() < 3 && !(lone && c.size() == 2) {
                        return fail("parallel component must have at least three edges");
                    }
                }
                SplitComponentType::Series => {
                    if vertices.len() < 3 || c.size() != vertices.len() {
                        return fail("series component must be a cycle of length at least three");
                    }

                    let mut local = GraphInternal::new(vertices.len());
                    for (s, t) in self.skeleton_endpoints(i) {
                        let s = vertices.partition_point(|&x| x < s);
                        let t = vertices.partition_point(|&x| x < t);
                        local.new_edge(s, t);
                    }
                    if local.adj.iter().any(|adj| adj.len() != 2)
                        || internal_blocks(&local).roots != 1
                    {
                        return fail("series component must be a single cycle");
                    }
                }
                SplitComponentType::Rigid => {
                    if vertices.len() < 4 {
                        return fail("rigid component must have at least four vertices");
                    }
                }
            }
        }

        let mut real_occurrences = vec![0usize; self.real_edges.len()];
        for c in &self.components {
            for e in &c.edges {
                real_occurrences[e.index()] += 1;
            }
        }
        for e in &self.omitted_edges {
            real_occurrences[e.index()] += 1;
        }

        // the lone edge of a trivial graph stays outside every component
        let trivial = self.components.is_empty()
            && self.real_edges.len() == self.omitted_edges.len() + 1;
        let bad_real: Vec<EdgeId> = real_occurrences
            .iter()
            .enumerate()
            .filter(|&(e, &count)| count != 1 && !(trivial && count == 0 && e == self.reference.index()))
            .map(|(e, _)| EdgeId::new(e))
            .collect();
        if !bad_real.is_empty() {
            return Err(Error::InvariantViolation {
                reason: "real edges must belong to exactly one component".into(),
                component: None,
                edges: bad_real,
            });
        }

        for (v, owners) in self.virtual_owners().iter().enumerate() {
            if owners.len() != 2 || owners[0] == owners[1] {
                return Err(Error::invariant(format!(
                    "virtual edge {v} is owned by components {owners:?}, expected two"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        triconnected_blocks::outside_structures::SplitComponent,
        types::VertexId,
    };

    fn square_with_chord() -> SplitComponents {
        let v = |i| VertexId::new(i);
        // 0-1, 1-2, 2-3, 3-0, 0-2
        SplitComponents {
            components: vec![
                SplitComponent {
                    component_type: SplitComponentType::Series,
                    edges: vec![EdgeId::new(0), EdgeId::new(1)],
                    virtual_edges: vec![0],
                },
                SplitComponent {
                    component_type: SplitComponentType::Parallel,
                    edges: vec![EdgeId::new(4)],
                    virtual_edges: vec![0, 1],
                },
                SplitComponent {
                    component_type: SplitComponentType::Series,
                    edges: vec![EdgeId::new(2), EdgeId::new(3)],
                    virtual_edges: vec![1],
                },
            ],
            virtual_edges: vec![(v(0), v(2)), (v(0), v(2))],
            reference: EdgeId::new(0),
            real_to_component: vec![Some(0), Some(0), Some(2), Some(2), Some(1)],
            omitted_edges: vec![],
            real_edges: vec![(v(0), v(1)), (v(1), v(2)), (v(2), v(3)), (v(3), v(0)), (v(0), v(2))],
        }
    }

    #[test]
    fn test_valid_components_pass() {
        assert_eq!(square_with_chord().verify(), Ok(()));
    }

    #[test]
    fn test_wrong_classification_is_reported() {
        let mut split = square_with_chord();
        split.components[0].component_type = SplitComponentType::Rigid;
        match split.verify() {
            Err(Error::InvariantViolation {
                component, edges, ..
            }) => {
                assert_eq!(component, Some(0));
                assert_eq!(edges, vec![EdgeId::new(0), EdgeId::new(1)]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unpaired_virtual_edge_is_reported() {
        let mut split = square_with_chord();
        split.components[2].virtual_edges.clear();
        split.components[2].component_type = SplitComponentType::Parallel;
        assert!(split.verify().is_err());

        let mut split = square_with_chord();
        split.components[1].virtual_edges = vec![0];
        split.components[2].virtual_edges = vec![0];
        assert!(matches!(
            split.verify(),
            Err(Error::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_lost_real_edge_is_reported() {
        let mut split = square_with_chord();
        split.components[1].edges.clear();
        split.components[1].virtual_edges.push(1);
        assert!(split.verify().is_err());
    }
}
