//! Typeset orchestration
//!
//! All column operations are a single [`Resolver::resolve`] call; frame
//! operations fan out over columns (rayon when configured and the `parallel`
//! feature is on) and never abort.

use super::builder::TypesetBuilder;
use crate::config::{TypesetConfig, Validatable};
use crate::errors::{NotPreparedError, Result, SemtypeError};
use crate::features::relation_graph::{GraphNode, RelationGraph, TypeNode, TypeRef};
use crate::features::resolution::{GraphResolver, Resolution, ResolveMode, Resolver};
use crate::features::summaries::{
    ColumnSummary, FrameSummary, GeneralSummary, SeriesSummary, SummaryReport,
};
use crate::shared::models::{Column, Frame};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Resolved type per column name
pub type ColumnTypeMap = HashMap<String, GraphNode>;

pub struct Typeset {
    graph: RelationGraph,
    resolver: Box<dyn Resolver>,
    config: TypesetConfig,
    column_type_map: Option<ColumnTypeMap>,
}

impl Typeset {
    /// Build a typeset with the default configuration.
    ///
    /// Fails if two types share a name or the relations form a cycle.
    pub fn new(base: Vec<Box<dyn TypeNode>>, derivative: Vec<Box<dyn TypeNode>>) -> Result<Self> {
        Self::with_config(base, derivative, TypesetConfig::default())
    }

    pub fn with_config(
        base: Vec<Box<dyn TypeNode>>,
        derivative: Vec<Box<dyn TypeNode>>,
        config: TypesetConfig,
    ) -> Result<Self> {
        Self::builder()
            .base(base.into_iter().map(TypeRef::from))
            .derivative(derivative.into_iter().map(TypeRef::from))
            .config(config)
            .build()
    }

    pub fn builder() -> TypesetBuilder {
        TypesetBuilder::default()
    }

    pub(super) fn from_parts(
        base: Vec<TypeRef>,
        derivative: Vec<TypeRef>,
        config: TypesetConfig,
        resolver: Option<Box<dyn Resolver>>,
    ) -> Result<Self> {
        config.validate()?;
        let graph = RelationGraph::build(base, derivative)?;
        let resolver =
            resolver.unwrap_or_else(|| Box::new(GraphResolver::new(config.conversion_policy)));

        debug!(
            types = graph.node_count() - 1,
            relations = graph.edge_count(),
            policy = config.conversion_policy.as_str(),
            "typeset ready"
        );

        Ok(Self {
            graph,
            resolver,
            config,
            column_type_map: None,
        })
    }

    // ═══════════════════════════════════════════════════════════════
    // Catalogue
    // ═══════════════════════════════════════════════════════════════

    pub fn graph(&self) -> &RelationGraph {
        &self.graph
    }

    pub fn config(&self) -> &TypesetConfig {
        &self.config
    }

    pub fn get(&self, name: &str) -> Option<&TypeRef> {
        self.graph.get(name)
    }

    pub fn contains_type(&self, name: &str) -> bool {
        self.graph.get(name).is_some()
    }

    /// Base types first, then derivative types, in declaration order
    pub fn types(&self) -> impl Iterator<Item = &TypeRef> {
        self.graph.types()
    }

    pub fn base_types(&self) -> &[TypeRef] {
        self.graph.base_types()
    }

    pub fn derivative_types(&self) -> &[TypeRef] {
        self.graph.derivative_types()
    }

    // ═══════════════════════════════════════════════════════════════
    // Column operations
    // ═══════════════════════════════════════════════════════════════

    /// Full resolution record: matched node, column state and visited path.
    pub fn resolve(&self, column: &Column, mode: ResolveMode) -> Result<Resolution> {
        self.resolver.resolve(column, &self.graph, mode)
    }

    /// Most specific type whose predicate holds on the raw column.
    ///
    /// Detection never converts, so only a custom resolver can fail here;
    /// such a failure yields the root.
    pub fn detect_series_type(&self, column: &Column) -> GraphNode {
        self.resolve(column, ResolveMode::Detect)
            .map(|r| r.node)
            .unwrap_or_else(|err| self.degrade(column, ResolveMode::Detect, &err))
    }

    pub fn infer_series_type(&self, column: &Column) -> Result<GraphNode> {
        Ok(self.resolve(column, ResolveMode::Infer)?.node)
    }

    /// The column as converted along the inference path.
    pub fn cast_series(&self, column: &Column) -> Result<Column> {
        Ok(self.resolve(column, ResolveMode::Infer)?.column)
    }

    // ═══════════════════════════════════════════════════════════════
    // Frame operations
    // ═══════════════════════════════════════════════════════════════

    pub fn detect_frame_type(&self, frame: &Frame) -> ColumnTypeMap {
        self.map_columns(frame, |column| {
            (column.name.clone(), self.detect_series_type(column))
        })
        .into_iter()
        .collect()
    }

    /// Columns whose resolution fails hard are reported as the root.
    pub fn infer_frame_type(&self, frame: &Frame) -> ColumnTypeMap {
        self.map_columns(frame, |column| {
            let node = self
                .infer_series_type(column)
                .unwrap_or_else(|err| self.degrade(column, ResolveMode::Infer, &err));
            (column.name.clone(), node)
        })
        .into_iter()
        .collect()
    }

    /// Cast every column, keeping names and order. A column whose
    /// resolution fails hard is kept unchanged.
    pub fn cast_frame(&self, frame: &Frame) -> Frame {
        self.map_columns(frame, |column| {
            self.cast_series(column).unwrap_or_else(|err| {
                self.degrade(column, ResolveMode::Infer, &err);
                column.clone()
            })
        })
        .into_iter()
        .collect()
    }

    fn map_columns<T, F>(&self, frame: &Frame, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&Column) -> T + Sync + Send,
    {
        #[cfg(feature = "parallel")]
        if self.config.parallel.should_parallelize(frame.n_columns()) {
            return frame.columns().par_iter().map(f).collect();
        }
        frame.columns().iter().map(f).collect()
    }

    fn degrade(&self, column: &Column, mode: ResolveMode, err: &SemtypeError) -> GraphNode {
        warn!(
            column = %column.name,
            mode = mode.as_str(),
            error = %err,
            "resolution failed; reporting column as {}",
            GraphNode::ROOT_NAME
        );
        GraphNode::Root
    }

    // ═══════════════════════════════════════════════════════════════
    // Prep / summaries
    // ═══════════════════════════════════════════════════════════════

    /// Infer and cache the type of every column, replacing any previous state.
    pub fn prep(&mut self, frame: &Frame) -> &mut Self {
        let map = self.infer_frame_type(frame);
        debug!(columns = map.len(), "typeset prepped");
        self.column_type_map = Some(map);
        self
    }

    pub fn column_type_map(&self) -> Option<&ColumnTypeMap> {
        self.column_type_map.as_ref()
    }

    /// Per-column summaries under the prepped types.
    pub fn summarize(&self, frame: &Frame) -> Result<FrameSummary> {
        let map = self.column_type_map.as_ref().ok_or(NotPreparedError)?;

        frame
            .columns()
            .iter()
            .map(|column| -> Result<ColumnSummary> {
                let node = map
                    .get(&column.name)
                    .ok_or_else(|| SemtypeError::ColumnNotPrepared(column.name.clone()))?;
                let summary = match node.as_type() {
                    Some(ty) => ty.summarize(column),
                    None => SeriesSummary::generic(node.name(), column),
                };
                Ok(ColumnSummary {
                    column: column.name.clone(),
                    summary,
                })
            })
            .collect()
    }

    pub fn general_summary(&self, frame: &Frame) -> GeneralSummary {
        GeneralSummary::from_frame(frame)
    }

    pub fn summary_report(&self, frame: &Frame) -> Result<SummaryReport> {
        let columns = self.summarize(frame)?;
        let types = columns
            .columns
            .iter()
            .map(|c| (c.column.clone(), c.summary.type_name.clone()))
            .collect();

        Ok(SummaryReport {
            general: self.general_summary(frame),
            types,
            columns,
        })
    }
}

impl std::fmt::Debug for Typeset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeset")
            .field("graph", &self.graph)
            .field("config", &self.config)
            .field("prepped", &self.column_type_map.is_some())
            .finish()
    }
}
