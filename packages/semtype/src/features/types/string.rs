use super::names;
use crate::features::relation_graph::{RelationConfig, TypeNode};
use crate::features::summaries::SeriesSummary;
use crate::shared::models::{Column, Value};

/// Text column.
///
/// No converter of its own; it is the source of the parse-based
/// refinements, tried in the order below.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringType;

impl TypeNode for StringType {
    fn name(&self) -> &str {
        names::STRING
    }

    fn contains(&self, column: &Column) -> bool {
        column.all_non_null(|v| matches!(v, Value::String(_)))
    }

    fn relations(&self) -> Vec<RelationConfig> {
        [
            names::BOOLEAN,
            names::INTEGER,
            names::FLOAT,
            names::COMPLEX,
            names::DATETIME,
            names::IP_ADDRESS,
        ]
        .into_iter()
        .map(RelationConfig::inferential)
        .collect()
    }

    fn summarize(&self, column: &Column) -> SeriesSummary {
        SeriesSummary::text(self.name(), column)
    }
}
