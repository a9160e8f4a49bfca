//! # graph_decomposition
//!
//! Structural decomposition of undirected multigraphs:
//!
//! - blocks and cut vertices ([`block_cut`]),
//! - split components and separation pairs of biconnected graphs ([`triconnected`]),
//! - rooted SPQR trees and proto-trees ([`spqr_tree`]),
//! - interlacement graphs of segments relative to a cycle ([`interlacement`]),
//! - planarity with faces or a Kuratowski obstruction ([`embedding`]).
//!
//! Based on [`petgraph`](https://docs.rs/petgraph). The library logs through
//! [`tracing`](https://docs.rs/tracing) and never installs a subscriber.
//!
//! ```
//! use graph_decomposition::{DecompositionOptions, EdgeId, get_spqr_tree, input};
//!
//! let graph = input::from_str("0,1\n1,2\n2,3\n3,0\n0,2\n").unwrap();
//! let tree = get_spqr_tree(&graph, EdgeId::new(0), &DecompositionOptions::default()).unwrap();
//! assert_eq!(tree.len(), 3);
//! ```

pub mod algorithm;
pub mod block_cut;
pub mod config;
pub mod embedding;
pub(crate) mod embedding_blocks;
pub mod error;
pub mod graph;
pub(crate) mod graph_internal;
pub mod input;
pub mod interlacement;
pub mod path;
pub mod spqr_blocks;
pub mod spqr_tree;
pub mod triconnected;
pub mod triconnected_blocks;
pub mod types;

#[cfg(test)]
mod testing;

pub use algorithm::{Algorithm, AlgorithmOutput, Execution, GraphAlgorithm};
pub use config::DecompositionOptions;
pub use embedding::{is_planar, test_planarity};
pub use error::{Error, Precondition, Result};
pub use graph::Graph;
pub use path::Path;
pub use spqr_tree::{SpqrTree, get_proto_spqr_tree, get_spqr_tree};
pub use triconnected::{get_split_components, separation_pairs};
pub use triconnected_blocks::outside_structures::{SplitComponent, SplitComponentType, SplitComponents};
pub use types::{EdgeId, EdgeLabel, VertexId};
