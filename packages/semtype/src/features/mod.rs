//! Feature modules
//!
//! - relation_graph: TypeNode contract, relations, DAG construction
//! - resolution:     greedy descent (Detect / Infer)
//! - types:          leaf type plugins
//! - typeset:        catalogue + orchestration (infer/detect/cast, prep/summarize)
//! - summaries:      per-series statistics and frame report

pub mod relation_graph;
pub mod resolution;
pub mod summaries;
pub mod types;
pub mod typeset;
