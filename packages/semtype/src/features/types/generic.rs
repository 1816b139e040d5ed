use super::names;
use crate::features::relation_graph::{RelationConfig, TypeNode};
use crate::shared::models::Column;

/// Universal base type: contains every column.
///
/// Refinements below it are detection-only; conversions start one level down.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generic;

impl TypeNode for Generic {
    fn name(&self) -> &str {
        names::GENERIC
    }

    fn contains(&self, _column: &Column) -> bool {
        true
    }

    fn relations(&self) -> Vec<RelationConfig> {
        [
            names::CATEGORICAL,
            names::BOOLEAN,
            names::INTEGER,
            names::FLOAT,
            names::COMPLEX,
            names::DATETIME,
            names::IP_ADDRESS,
            names::STRING,
            names::OBJECT,
        ]
        .into_iter()
        .map(RelationConfig::detection_only)
        .collect()
    }
}
