mod report;
mod series;

pub use report::{ColumnSummary, FrameSummary, GeneralSummary, SummaryReport};
pub use series::{NumericSummary, SeriesSummary, TextSummary};
