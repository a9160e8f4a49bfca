use crate::{Graph, types::VertexId};

/// Enumerates all simple graphs on `n` labelled vertices, one per edge mask.
pub(crate) struct GraphEnumeratorState {
    pub n: usize,
    pub mask: usize,
    pub last_mask: usize,
}

impl GraphEnumeratorState {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            mask: 0,
            last_mask: 1 << (n * (n - 1) / 2),
        }
    }
}

impl Iterator for GraphEnumeratorState {
    type Item = Graph;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut graph = Graph::new();
        for i in 0..self.n {
            graph.add_vertex(i as u32);
        }

        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    graph
                        .add_edge(VertexId::new(i), VertexId::new(j))
                        .expect("vertices exist");
                }
                check += 1;
            }
        }

        self.mask += 1;
        Some(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerates_every_mask() {
        let graphs: Vec<Graph> = GraphEnumeratorState::new(3).collect();
        assert_eq!(graphs.len(), 8);
        assert_eq!(graphs[0].edge_count(), 0);
        assert_eq!(graphs[7].edge_count(), 3);
    }
}
