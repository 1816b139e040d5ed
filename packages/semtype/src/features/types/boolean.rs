use super::{convert_strings, names};
use crate::errors::ConversionResult;
use crate::features::relation_graph::TypeNode;
use crate::shared::models::{Column, Value};

/// Boolean column
#[derive(Debug, Clone, Copy, Default)]
pub struct Boolean;

fn parse_bool(s: &str) -> Result<bool, &'static str> {
    match s {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        _ => Err("not a boolean literal"),
    }
}

impl TypeNode for Boolean {
    fn name(&self) -> &str {
        names::BOOLEAN
    }

    fn contains(&self, column: &Column) -> bool {
        column.all_non_null(|v| matches!(v, Value::Bool(_)))
    }

    fn convert(&self, column: &Column) -> ConversionResult<Column> {
        convert_strings(self.name(), column, parse_bool, Value::Bool)
    }
}
