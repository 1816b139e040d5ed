//! Column and frame summaries
//!
//! Summaries are dispatched on the resolved type: each [`TypeNode`] picks
//! the statistics that make sense for its values.
//!
//! [`TypeNode`]: crate::features::relation_graph::TypeNode

pub mod domain;

pub use domain::{
    ColumnSummary, FrameSummary, GeneralSummary, NumericSummary, SeriesSummary, SummaryReport,
    TextSummary,
};
