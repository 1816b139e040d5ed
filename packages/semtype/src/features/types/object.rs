use super::names;
use crate::features::relation_graph::TypeNode;
use crate::shared::models::Column;

/// Fallback for columns with values of mixed kinds.
///
/// Declared last under `Generic`, so it only catches what no sibling claimed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Object;

impl TypeNode for Object {
    fn name(&self) -> &str {
        names::OBJECT
    }

    fn contains(&self, column: &Column) -> bool {
        column.non_null().next().is_some()
    }
}
