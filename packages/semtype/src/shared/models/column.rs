//! Named column of cells

use super::value::Value;
use serde::{Deserialize, Serialize};

/// A named, materialized column.
///
/// `categorical` marks dictionary-encoded storage; it is a property of the
/// column, not of its values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
    #[serde(default)]
    pub categorical: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
            categorical: false,
        }
    }

    /// Build a column from anything convertible into [`Value`].
    pub fn from_values<T: Into<Value>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        Self::new(name, values.into_iter().map(Into::into).collect())
    }

    /// Mark the column as categorical (dictionary-encoded).
    pub fn into_categorical(mut self) -> Self {
        self.categorical = true;
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over non-null values.
    pub fn non_null(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().filter(|v| !v.is_null())
    }

    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    /// True if there is at least one non-null value and all non-null values
    /// satisfy `pred`.
    pub fn all_non_null(&self, pred: impl Fn(&Value) -> bool) -> bool {
        let mut seen = false;
        for value in self.non_null() {
            if !pred(value) {
                return false;
            }
            seen = true;
        }
        seen
    }
}
