use crate::errors::Result;
use crate::features::relation_graph::RelationGraph;
use crate::features::resolution::domain::{Resolution, ResolveMode};
use crate::shared::models::Column;

/// Column → type resolution over an immutable relation graph
pub trait Resolver: Send + Sync {
    fn resolve(&self, column: &Column, graph: &RelationGraph, mode: ResolveMode)
        -> Result<Resolution>;
}
