//! Resolution domain model

use crate::features::relation_graph::GraphNode;
use crate::shared::models::Column;

/// Traversal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveMode {
    /// Predicates only; the column is never converted
    Detect,
    /// Predicates, then inferential conversions when no predicate matches
    Infer,
}

impl ResolveMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolveMode::Detect => "detect",
            ResolveMode::Infer => "infer",
        }
    }
}

/// Outcome of resolving one column
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Deepest matching vertex (`Root` if no base type matched)
    pub node: GraphNode,

    /// Column state at that depth
    pub column: Column,

    /// Type names along the walk, first base type first
    pub path: Vec<String>,

    /// True if any edge on the path converted the column
    pub converted: bool,
}

impl Resolution {
    /// Name of the matched type
    pub fn type_name(&self) -> &str {
        self.node.name()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }
}
