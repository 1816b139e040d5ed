//! Relation graph construction (petgraph)

mod cycle_detection;
pub mod graph_builder;

pub use graph_builder::RelationGraph;
