//! Free-function API
//!
//! Thin wrappers over [`Typeset`]; frame functions report failing columns as
//! the root instead of aborting.

use crate::errors::Result;
use crate::features::relation_graph::GraphNode;
use crate::features::typeset::{ColumnTypeMap, Typeset};
use crate::shared::models::{Column, Frame};

pub fn detect_series_type(column: &Column, typeset: &Typeset) -> GraphNode {
    typeset.detect_series_type(column)
}

pub fn infer_series_type(column: &Column, typeset: &Typeset) -> Result<GraphNode> {
    typeset.infer_series_type(column)
}

pub fn cast_series(column: &Column, typeset: &Typeset) -> Result<Column> {
    typeset.cast_series(column)
}

pub fn detect_frame_type(frame: &Frame, typeset: &Typeset) -> ColumnTypeMap {
    typeset.detect_frame_type(frame)
}

pub fn infer_frame_type(frame: &Frame, typeset: &Typeset) -> ColumnTypeMap {
    typeset.infer_frame_type(frame)
}

/// Cast every column; names and order are preserved.
pub fn cast_frame(frame: &Frame, typeset: &Typeset) -> Frame {
    typeset.cast_frame(frame)
}
