use super::{convert_strings, names};
use crate::errors::ConversionResult;
use crate::features::relation_graph::TypeNode;
use crate::features::summaries::SeriesSummary;
use crate::shared::models::{Column, Value};

/// 64-bit integer column
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

impl TypeNode for Integer {
    fn name(&self) -> &str {
        names::INTEGER
    }

    fn contains(&self, column: &Column) -> bool {
        column.all_non_null(|v| matches!(v, Value::Int(_)))
    }

    /// Parse decimal strings (leading zeros and a sign allowed).
    fn convert(&self, column: &Column) -> ConversionResult<Column> {
        convert_strings(self.name(), column, str::parse::<i64>, Value::Int)
    }

    fn summarize(&self, column: &Column) -> SeriesSummary {
        SeriesSummary::numeric(self.name(), column)
    }
}
