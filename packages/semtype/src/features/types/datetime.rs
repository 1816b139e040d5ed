use super::{convert_strings, names};
use crate::errors::ConversionResult;
use crate::features::relation_graph::TypeNode;
use crate::shared::models::{Column, Value};
use chrono::{NaiveDate, NaiveDateTime};

/// Timestamp column (timezone-naive)
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTime;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Accepts the formats above, RFC 3339 (normalized to UTC) and bare dates.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, &'static str> {
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or("not a recognized date/time format")
}

impl TypeNode for DateTime {
    fn name(&self) -> &str {
        names::DATETIME
    }

    fn contains(&self, column: &Column) -> bool {
        column.all_non_null(|v| matches!(v, Value::DateTime(_)))
    }

    fn convert(&self, column: &Column) -> ConversionResult<Column> {
        convert_strings(self.name(), column, parse_datetime, Value::DateTime)
    }
}
