//! Type relation graph
//!
//! A synthetic root, the base types directly below it, and derivative types
//! reachable through declared relations. Built once, immutable afterwards.

pub mod domain;
pub mod infrastructure;

pub use domain::{GraphNode, Relation, RelationConfig, TypeNode, TypeRef};
pub use infrastructure::RelationGraph;
