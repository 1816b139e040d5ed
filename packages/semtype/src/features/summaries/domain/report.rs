//! Frame-level summaries

use super::series::SeriesSummary;
use crate::shared::models::Frame;
use serde::Serialize;
use std::collections::BTreeMap;

/// Shape of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneralSummary {
    pub n_observations: usize,
    pub n_variables: usize,
}

impl GeneralSummary {
    pub fn from_frame(frame: &Frame) -> Self {
        Self {
            n_observations: frame.n_rows(),
            n_variables: frame.n_columns(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    #[serde(flatten)]
    pub summary: SeriesSummary,
}

/// Column summaries in frame order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FrameSummary {
    pub columns: Vec<ColumnSummary>,
}

impl FrameSummary {
    pub fn get(&self, column: &str) -> Option<&SeriesSummary> {
        self.columns
            .iter()
            .find(|c| c.column == column)
            .map(|c| &c.summary)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<ColumnSummary> for FrameSummary {
    fn from_iter<I: IntoIterator<Item = ColumnSummary>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

/// Combined report: shape, resolved types and column statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub general: GeneralSummary,
    pub types: BTreeMap<String, String>,
    pub columns: FrameSummary,
}

impl SummaryReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
