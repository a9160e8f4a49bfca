use fixedbitset::FixedBitSet;
use tracing::trace;

use crate::triconnected_blocks::outside_structures::{
    SplitComponent, SplitComponentType, SplitComponents,
};

impl SplitComponents {
    /// Merges Series components that share a virtual edge into one Series
    /// component, and likewise for Parallel components. Shared virtual edges
    /// disappear; the remaining ones are renumbered keeping their order.
    ///
    /// Applying it to canonical components changes nothing.
    pub fn canonicalize(&mut self) {
        let owners = self.virtual_owners();
        let k = self.components.len();

        // groups of same-typed components connected through virtual edges
        let mut group_of = vec![usize::MAX; k];
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for i in 0..k {
            if group_of[i] != usize::MAX {
                continue;
            }
            let component_type = self.components[i].component_type;
            let mut collected = vec![i];
            group_of[i] = groups.len();

            let mut j = 0;
            while j < collected.len() && component_type != SplitComponentType::Rigid {
                for &v in &self.components[collected[j]].virtual_edges {
                    for &other in &owners[v] {
                        if group_of[other] == usize::MAX
                            && self.components[other].component_type == component_type
                        {
                            group_of[other] = groups.len();
                            collected.push(other);
                        }
                    }
                }
                j += 1;
            }

            groups.push(collected);
        }

        let mut dissolved = FixedBitSet::with_capacity(self.virtual_edges.len());
        for (v, owner) in owners.iter().enumerate() {
            if let [x, y] = owner[..] {
                if x != y && group_of[x] == group_of[y] {
                    dissolved.insert(v);
                }
            }
        }

        let mut new_id = vec![usize::MAX; self.virtual_edges.len()];
        let mut virtual_edges = Vec::with_capacity(self.virtual_edges.len() - dissolved.count_ones(..));
        for v in dissolved.zeroes() {
            new_id[v] = virtual_edges.len();
            virtual_edges.push(self.virtual_edges[v]);
        }

        let merged: Vec<SplitComponent> = groups
            .iter()
            .map(|group| {
                let mut edges = Vec::new();
                let mut virtual_edges = Vec::new();
                for &i in group {
                    let c = &self.components[i];
                    edges.extend_from_slice(&c.edges);
                    virtual_edges.extend(
                        c.virtual_edges
                            .iter()
                            .filter(|&&v| !dissolved.contains(v))
                            .map(|&v| new_id[v]),
                    );
                }
                edges.sort_unstable();
                virtual_edges.sort_unstable();
                virtual_edges.dedup();
                SplitComponent {
                    component_type: self.components[group[0]].component_type,
                    edges,
                    virtual_edges,
                }
            })
            .collect();

        trace!(
            before = k,
            after = merged.len(),
            dissolved = dissolved.count_ones(..),
            "canonicalized split components"
        );

        self.components = merged;
        self.virtual_edges = virtual_edges;
        self.update_real_to_component();
    }
}
