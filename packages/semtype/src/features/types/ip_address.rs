use super::{convert_strings, names};
use crate::errors::ConversionResult;
use crate::features::relation_graph::TypeNode;
use crate::shared::models::{Column, Value};
use std::net::IpAddr;

/// IP address column (v4 and v6)
#[derive(Debug, Clone, Copy, Default)]
pub struct IpAddress;

impl TypeNode for IpAddress {
    fn name(&self) -> &str {
        names::IP_ADDRESS
    }

    fn contains(&self, column: &Column) -> bool {
        column.all_non_null(|v| matches!(v, Value::IpAddr(_)))
    }

    fn convert(&self, column: &Column) -> ConversionResult<Column> {
        convert_strings(self.name(), column, str::parse::<IpAddr>, Value::IpAddr)
    }
}
