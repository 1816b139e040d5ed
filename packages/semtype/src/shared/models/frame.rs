//! Ordered collection of columns

use super::column::Column;
use serde::{Deserialize, Serialize};

/// An ordered set of uniquely named columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<Column>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame, replacing earlier columns that share a name.
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> Self {
        let mut frame = Self::new();
        for column in columns {
            frame.insert(column);
        }
        frame
    }

    /// Insert a column; a column with the same name is replaced in place.
    pub fn insert(&mut self, column: Column) {
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, taken as the longest column.
    pub fn n_rows(&self) -> usize {
        self.columns.iter().map(Column::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<Column> for Frame {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Self::from_columns(iter)
    }
}
