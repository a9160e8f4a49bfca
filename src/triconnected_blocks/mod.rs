pub(crate) mod fragment;
pub(crate) mod handle_duplicate_edges;
pub(crate) mod help_graph;
pub(crate) mod merge_components;
pub(crate) mod verify;

pub mod outside_structures;
