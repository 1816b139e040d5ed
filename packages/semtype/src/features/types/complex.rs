use super::{convert_strings, names, narrow_cells};
use crate::errors::{ConversionError, ConversionResult};
use crate::features::relation_graph::{RelationConfig, TypeNode};
use crate::shared::models::{Column, Complex, Value};

/// Complex number column
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexType;

/// Complex → Float when every imaginary part is zero
fn real_parts(column: &Column) -> ConversionResult<Column> {
    narrow_cells(column, |value| match value {
        Value::Complex(c) if c.is_real() => Ok(Value::Float(c.re)),
        other => Err(ConversionError::unsupported(
            names::FLOAT,
            other,
            "imaginary part is not zero",
        )),
    })
}

impl TypeNode for ComplexType {
    fn name(&self) -> &str {
        names::COMPLEX
    }

    fn contains(&self, column: &Column) -> bool {
        column.all_non_null(|v| matches!(v, Value::Complex(_)))
    }

    fn convert(&self, column: &Column) -> ConversionResult<Column> {
        convert_strings(self.name(), column, str::parse::<Complex>, Value::Complex)
    }

    fn relations(&self) -> Vec<RelationConfig> {
        vec![RelationConfig::inferential(names::FLOAT).with_converter(real_parts)]
    }
}
