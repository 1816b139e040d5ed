//! Resolution infrastructure

pub mod graph_resolver;

pub use graph_resolver::GraphResolver;
