use super::{convert_strings, names, narrow_cells};
use crate::errors::{ConversionError, ConversionResult};
use crate::features::relation_graph::{RelationConfig, TypeNode};
use crate::features::summaries::SeriesSummary;
use crate::shared::models::{Column, Value};

/// 64-bit floating point column
#[derive(Debug, Clone, Copy, Default)]
pub struct Float;

/// Float → Integer when every value is whole and fits in i64
fn whole_floats_to_ints(column: &Column) -> ConversionResult<Column> {
    narrow_cells(column, |value| match value {
        Value::Float(f) if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 => {
            Ok(Value::Int(*f as i64))
        }
        other => Err(ConversionError::unsupported(
            names::INTEGER,
            other,
            "not a whole number",
        )),
    })
}

impl TypeNode for Float {
    fn name(&self) -> &str {
        names::FLOAT
    }

    fn contains(&self, column: &Column) -> bool {
        column.all_non_null(|v| matches!(v, Value::Float(_)))
    }

    fn convert(&self, column: &Column) -> ConversionResult<Column> {
        convert_strings(self.name(), column, str::parse::<f64>, Value::Float)
    }

    fn relations(&self) -> Vec<RelationConfig> {
        vec![RelationConfig::inferential(names::INTEGER).with_converter(whole_floats_to_ints)]
    }

    fn summarize(&self, column: &Column) -> SeriesSummary {
        SeriesSummary::numeric(self.name(), column)
    }
}
