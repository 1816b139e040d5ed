//! Leaf type plugins
//!
//! Each type implements the [`TypeNode`](crate::features::relation_graph::TypeNode)
//! contract and declares its outgoing relations by target name. Relations
//! toward types missing from a typeset are dropped at graph build, so a type
//! may list every refinement it knows about.
//!
//! Leaf predicates ignore nulls and require at least one non-null value:
//! an empty or all-null column stays at `Generic`.

pub mod boolean;
pub mod categorical;
pub mod complex;
pub mod datetime;
pub mod float;
pub mod generic;
pub mod integer;
pub mod ip_address;
pub mod object;
pub mod string;

pub use boolean::Boolean;
pub use categorical::Categorical;
pub use complex::ComplexType;
pub use datetime::DateTime;
pub use float::Float;
pub use generic::Generic;
pub use integer::Integer;
pub use ip_address::IpAddress;
pub use object::Object;
pub use string::StringType;

/// Type names, used as relation targets
pub mod names {
    pub const GENERIC: &str = "Generic";
    pub const CATEGORICAL: &str = "Categorical";
    pub const BOOLEAN: &str = "Boolean";
    pub const INTEGER: &str = "Integer";
    pub const FLOAT: &str = "Float";
    pub const COMPLEX: &str = "Complex";
    pub const DATETIME: &str = "DateTime";
    pub const IP_ADDRESS: &str = "IpAddress";
    pub const STRING: &str = "String";
    pub const OBJECT: &str = "Object";
}

use crate::errors::{ConversionError, ConversionResult};
use crate::shared::models::{Column, Value};

/// Convert every non-null cell, keeping nulls and the column name.
///
/// Every cell is attempted. If no cell converts, the first cell error is
/// returned as is; if only some do, the result is
/// [`ConversionError::Partial`]. Hard cell errors are returned unchanged.
pub fn convert_cells(
    type_name: &str,
    column: &Column,
    mut convert: impl FnMut(&Value) -> ConversionResult<Value>,
) -> ConversionResult<Column> {
    let mut values = Vec::with_capacity(column.len());
    let mut converted = 0;
    let mut failed = 0;
    let mut first_error: Option<ConversionError> = None;

    for value in &column.values {
        if value.is_null() {
            values.push(Value::Null);
            continue;
        }
        match convert(value) {
            Ok(cell) => {
                converted += 1;
                values.push(cell);
            }
            Err(err) => {
                failed += 1;
                values.push(Value::Null);
                first_error.get_or_insert(err);
            }
        }
    }

    match first_error {
        None => Ok(Column::new(column.name.clone(), values)),
        Some(err) if converted == 0 || err.is_hard() => Err(err),
        Some(err) => Err(ConversionError::partial(type_name, converted, failed, &err)),
    }
}

/// Convert every non-null cell, stopping at the first failing cell.
///
/// Used by refinements of an already typed column: a column where only some
/// values narrow is simply not of the narrower type, so no partial result is
/// ever reported.
pub(crate) fn narrow_cells(
    column: &Column,
    convert: impl Fn(&Value) -> ConversionResult<Value>,
) -> ConversionResult<Column> {
    let values = column
        .values
        .iter()
        .map(|value| if value.is_null() { Ok(Value::Null) } else { convert(value) })
        .collect::<ConversionResult<Vec<_>>>()?;
    Ok(Column::new(column.name.clone(), values))
}

/// Convert every non-null string cell with `parse`; any other cell kind or a
/// parse failure is an unsupported value.
pub(crate) fn convert_strings<T, E: std::fmt::Display>(
    type_name: &str,
    column: &Column,
    parse: impl Fn(&str) -> Result<T, E>,
    wrap: impl Fn(T) -> Value,
) -> ConversionResult<Column> {
    convert_cells(type_name, column, |value| match value {
        Value::String(s) => parse(s)
            .map(&wrap)
            .map_err(|e| ConversionError::unsupported(type_name, value, e)),
        other => Err(ConversionError::unsupported(
            type_name,
            other,
            "expected a string",
        )),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn halve_evens(value: &Value) -> ConversionResult<Value> {
        match value.as_int() {
            Some(n) if n % 2 == 0 => Ok(Value::Int(n / 2)),
            _ => Err(ConversionError::unsupported("Half", value, "odd")),
        }
    }

    #[test]
    fn test_convert_cells_keeps_nulls() {
        let col =
            Column::new("c", vec![Value::Int(4), Value::Null, Value::Int(2)]).into_categorical();
        let converted = convert_cells("Half", &col, halve_evens).unwrap();

        assert_eq!(converted.values, vec![Value::Int(2), Value::Null, Value::Int(1)]);
        assert_eq!(converted.name, "c");
        assert!(!converted.categorical);
    }

    #[test]
    fn test_convert_cells_nothing_converted_is_unsupported() {
        let col = Column::from_values("c", [1i64, 3]);
        assert!(matches!(
            convert_cells("Half", &col, halve_evens),
            Err(ConversionError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_convert_cells_counts_partial_conversion() {
        let col = Column::from_values("c", [2i64, 3, 4, 5]);
        match convert_cells("Half", &col, halve_evens) {
            Err(ConversionError::Partial {
                converted, failed, ..
            }) => {
                assert_eq!(converted, 2);
                assert_eq!(failed, 2);
            }
            other => panic!("expected a partial conversion, got {other:?}"),
        }
    }

    #[test]
    fn test_convert_cells_hard_error_unchanged() {
        let col = Column::from_values("c", [2i64, 3]);
        let result = convert_cells("Half", &col, |v| match v.as_int() {
            Some(2) => Ok(Value::Int(1)),
            _ => Err(ConversionError::malformed("Half", "broken cell")),
        });
        assert!(matches!(result, Err(ConversionError::Malformed { .. })));
    }

    #[test]
    fn test_narrow_cells_is_all_or_nothing() {
        let col = Column::new("c", vec![Value::Int(2), Value::Null, Value::Int(3)]);
        assert!(matches!(
            narrow_cells(&col, halve_evens),
            Err(ConversionError::Unsupported { .. })
        ));

        let col = Column::new("c", vec![Value::Int(2), Value::Null, Value::Int(4)]);
        assert_eq!(
            narrow_cells(&col, halve_evens).unwrap().values,
            vec![Value::Int(1), Value::Null, Value::Int(2)]
        );
    }
}
