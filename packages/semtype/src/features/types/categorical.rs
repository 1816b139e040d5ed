use super::names;
use crate::features::relation_graph::TypeNode;
use crate::shared::models::Column;

/// Dictionary-encoded column. Detected from storage, never converted into.
#[derive(Debug, Clone, Copy, Default)]
pub struct Categorical;

impl TypeNode for Categorical {
    fn name(&self) -> &str {
        names::CATEGORICAL
    }

    fn contains(&self, column: &Column) -> bool {
        column.categorical
    }
}
