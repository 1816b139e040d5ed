//! TypeNode capability interface

use super::relation::RelationConfig;
use crate::errors::{ConversionError, ConversionResult};
use crate::features::summaries::SeriesSummary;
use crate::shared::models::Column;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a type node owned by a typeset
pub type TypeRef = Arc<dyn TypeNode>;

/// A semantic type: membership predicate, optional converter, outgoing relations.
///
/// Implementations must be free of shared mutable state: columns are resolved
/// concurrently against the same nodes.
pub trait TypeNode: Send + Sync + fmt::Debug {
    /// Unique name within a typeset; graph vertex key and identity.
    fn name(&self) -> &str;

    /// Pure membership predicate. Return `false` when inapplicable, never panic.
    fn contains(&self, column: &Column) -> bool;

    /// Convert a column into this type.
    ///
    /// Only invoked when `contains` is false and the edge into this node is
    /// inferential. Nodes without a converter keep the default.
    fn convert(&self, column: &Column) -> ConversionResult<Column> {
        let _ = column;
        Err(ConversionError::no_converter(self.name()))
    }

    /// Outgoing relations, in priority order. Consumed only at graph build.
    fn relations(&self) -> Vec<RelationConfig> {
        Vec::new()
    }

    /// Summary statistics for a column of this type.
    fn summarize(&self, column: &Column) -> SeriesSummary {
        SeriesSummary::generic(self.name(), column)
    }
}

impl PartialEq for dyn TypeNode {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for dyn TypeNode {}

impl std::hash::Hash for dyn TypeNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Display for dyn TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
