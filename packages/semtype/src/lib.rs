/*
 * semtype - Semantic type inference over in-memory columns
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Column model (Value, Column, Frame)
 * - features/    : Vertical slices (relation_graph → resolution → types → typeset → summaries)
 * - api/         : Free-function surface
 * - config/      : Presets, YAML/JSON loading, validation
 *
 * Types form a DAG under a synthetic root. Detection walks predicates only;
 * inference also converts across inferential relations. Frame operations
 * resolve columns independently (rayon work-stealing when enabled).
 */

// Crate-level lint configuration
#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::module_inception)] // typeset::typeset
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::derivable_impls)] // Manual impl for documentation

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules (vertical slices)
pub mod features;

/// Free-function API
pub mod api;

/// Configuration
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use api::{
    cast_frame, cast_series, detect_frame_type, detect_series_type, infer_frame_type,
    infer_series_type,
};
pub use config::{ConversionPolicy, ParallelConfig, Preset, TypesetConfig};
pub use errors::{
    ConversionError, ConversionResult, CyclicRelationsError, NotPreparedError, Result,
    SemtypeError,
};
pub use features::relation_graph::{
    GraphNode, Relation, RelationConfig, RelationGraph, TypeNode, TypeRef,
};
pub use features::resolution::{GraphResolver, Resolution, ResolveMode, Resolver};
pub use features::summaries::{FrameSummary, SeriesSummary, SummaryReport};
pub use features::typeset::{complete_set, standard_set, ColumnTypeMap, Typeset, TypesetBuilder};
pub use shared::models::{Column, Complex, Frame, Value};
