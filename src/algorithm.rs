use std::time::{Duration, Instant};

use tracing::info;

use crate::{
    DecompositionOptions, Graph,
    block_cut::{BlockCutTree, get_block_cut_tree},
    embedding::{Planarity, test_planarity},
    error::Result,
    spqr_tree::{SpqrTree, get_proto_spqr_tree, get_spqr_tree},
    triconnected::{get_split_components, separation_pairs},
    triconnected_blocks::outside_structures::SplitComponents,
    types::{EdgeId, VertexId},
};

/// Every algorithm the crate can run on a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Biconnectivity,
    SeparationPairs,
    SplitComponents { reference: EdgeId },
    SpqrTree { reference: EdgeId },
    ProtoSpqrTree { reference: EdgeId },
    Planarity,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Biconnectivity => write!(f, "biconnectivity"),
            Algorithm::SeparationPairs => write!(f, "separation pairs"),
            Algorithm::SplitComponents { .. } => write!(f, "split components"),
            Algorithm::SpqrTree { .. } => write!(f, "SPQR tree"),
            Algorithm::ProtoSpqrTree { .. } => write!(f, "proto SPQR tree"),
            Algorithm::Planarity => write!(f, "planarity"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AlgorithmOutput {
    Biconnectivity(BlockCutTree),
    SeparationPairs(Vec<(VertexId, VertexId)>),
    SplitComponents(SplitComponents),
    SpqrTree(SpqrTree),
    Planarity(Planarity),
}

/// Result of an algorithm together with the wall time it took.
#[derive(Debug, Clone)]
pub struct Execution {
    pub output: AlgorithmOutput,
    pub elapsed: Duration,
}

pub trait GraphAlgorithm<V> {
    fn run(&self, graph: &Graph<V>, options: &DecompositionOptions) -> Result<AlgorithmOutput>;

    /// Runs the algorithm and measures it.
    fn execute(&self, graph: &Graph<V>, options: &DecompositionOptions) -> Result<Execution>
    where
        Self: std::fmt::Display,
    {
        let start = Instant::now();
        let output = self.run(graph, options)?;
        let elapsed = start.elapsed();
        info!(
            algorithm = %self,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            ?elapsed,
            "algorithm finished"
        );
        Ok(Execution { output, elapsed })
    }
}

impl<V> GraphAlgorithm<V> for Algorithm {
    fn run(&self, graph: &Graph<V>, options: &DecompositionOptions) -> Result<AlgorithmOutput> {
        Ok(match *self {
            Algorithm::Biconnectivity => AlgorithmOutput::Biconnectivity(get_block_cut_tree(graph)),
            Algorithm::SeparationPairs => AlgorithmOutput::SeparationPairs(separation_pairs(graph)?),
            Algorithm::SplitComponents { reference } => {
                AlgorithmOutput::SplitComponents(get_split_components(graph, reference, options)?)
            }
            Algorithm::SpqrTree { reference } => {
                AlgorithmOutput::SpqrTree(get_spqr_tree(graph, reference, options)?)
            }
            Algorithm::ProtoSpqrTree { reference } => {
                AlgorithmOutput::SpqrTree(get_proto_spqr_tree(graph, reference, options)?)
            }
            Algorithm::Planarity => AlgorithmOutput::Planarity(test_planarity(graph)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error, Precondition,
        testing::fixtures::{diamond_graph, fan_graph, labelled_edge},
    };

    #[test]
    fn test_every_algorithm_runs() {
        let diamond = diamond_graph();
        let reference = labelled_edge(&diamond, 1, 2);
        let options = DecompositionOptions::default();

        let algorithms = [
            Algorithm::Biconnectivity,
            Algorithm::SeparationPairs,
            Algorithm::SplitComponents { reference },
            Algorithm::SpqrTree { reference },
            Algorithm::ProtoSpqrTree { reference },
            Algorithm::Planarity,
        ];
        for algorithm in algorithms {
            let execution = algorithm.execute(&diamond, &options).unwrap();
            match (algorithm, execution.output) {
                (Algorithm::Biconnectivity, AlgorithmOutput::Biconnectivity(bct)) => {
                    assert_eq!(bct.block_count, 1);
                    assert!(bct.cut_vertices.is_empty());
                }
                (Algorithm::SeparationPairs, AlgorithmOutput::SeparationPairs(pairs)) => {
                    assert_eq!(pairs, vec![(VertexId::new(0), VertexId::new(1))]);
                }
                (Algorithm::SplitComponents { .. }, AlgorithmOutput::SplitComponents(c)) => {
                    assert_eq!(c.type_counts(), (2, 1, 0));
                }
                (Algorithm::SpqrTree { .. } | Algorithm::ProtoSpqrTree { .. }, AlgorithmOutput::SpqrTree(tree)) => {
                    assert_eq!(tree.len(), 3);
                }
                (Algorithm::Planarity, AlgorithmOutput::Planarity(planarity)) => {
                    assert!(planarity.is_planar());
                }
                (algorithm, output) => panic!("{algorithm} produced {output:?}"),
            }
        }
    }

    #[test]
    fn test_preconditions_surface() {
        let fan = fan_graph();
        let reference = labelled_edge(&fan, 1, 2);
        let options = DecompositionOptions::default();

        let strict = Algorithm::SpqrTree { reference }.execute(&fan, &options);
        assert!(matches!(
            strict,
            Err(Error::NotApplicable(Precondition::NotBiconnected(_)))
        ));
        assert!(Algorithm::ProtoSpqrTree { reference }.execute(&fan, &options).is_ok());
        assert!(GraphAlgorithm::<u32>::run(&Algorithm::Biconnectivity, &fan, &options).is_ok());
    }
}
