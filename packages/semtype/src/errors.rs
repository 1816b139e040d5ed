//! Error types for semtype
//!
//! Provides unified error handling across the crate.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for semtype operations
#[derive(Debug, Error)]
pub enum SemtypeError {
    /// The relation catalogue contains a directed cycle
    #[error(transparent)]
    CyclicRelations(#[from] CyclicRelationsError),

    /// A converter failed hard during inferential traversal
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Summarize called before prep
    #[error(transparent)]
    NotPrepared(#[from] NotPreparedError),

    /// Column absent from the prepped column type map
    #[error("Column '{0}' was not part of the prepped dataset. Call prep() with this frame")]
    ColumnNotPrepared(String),

    /// Two type nodes share a name
    #[error("Duplicate type name '{0}' in typeset")]
    DuplicateType(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for semtype operations
pub type Result<T> = std::result::Result<T, SemtypeError>;

/// Directed cycle found while building a relation graph.
///
/// `cycle` lists type names along the cycle, first name repeated at the end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cyclical relations between types detected: {}", cycle.join(" -> "))]
pub struct CyclicRelationsError {
    pub cycle: Vec<String>,
}

/// `summarize` was called on a typeset that has not been prepped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("typeset hasn't been prepped for your dataset yet. Call prep(frame)")]
pub struct NotPreparedError;

/// Failure of a type converter.
///
/// Whether a failure aborts resolution is decided by [`ConversionError::is_hard`]
/// together with the configured [`ConversionPolicy`](crate::config::ConversionPolicy).
/// A conversion that no cell survives is a plain non-match under every policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The target type declares no converter
    #[error("Type '{type_name}' has no converter")]
    NoConverter { type_name: String },

    /// A value cannot be represented in the target type
    #[error("Cannot convert {value_kind} value '{value}' to {type_name}: {reason}")]
    Unsupported {
        type_name: String,
        value_kind: String,
        value: String,
        reason: String,
    },

    /// Some cells converted and others did not
    #[error("Partial conversion to {type_name}: {converted} value(s) converted, {failed} failed ({first_error})")]
    Partial {
        type_name: String,
        converted: usize,
        failed: usize,
        first_error: String,
    },

    /// The column is structurally broken (e.g. converter changed the row count)
    #[error("Malformed column for {type_name}: {reason}")]
    Malformed { type_name: String, reason: String },
}

impl ConversionError {
    /// Create a no-converter error
    pub fn no_converter(type_name: impl Into<String>) -> Self {
        Self::NoConverter {
            type_name: type_name.into(),
        }
    }

    /// Create an unsupported-value error
    pub fn unsupported(
        type_name: impl Into<String>,
        value: &crate::shared::models::Value,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::Unsupported {
            type_name: type_name.into(),
            value_kind: value.kind().to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a malformed-column error
    pub fn malformed(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a partial-conversion error from the first cell failure
    pub fn partial(
        type_name: impl Into<String>,
        converted: usize,
        failed: usize,
        first_error: &ConversionError,
    ) -> Self {
        Self::Partial {
            type_name: type_name.into(),
            converted,
            failed,
            first_error: first_error.to_string(),
        }
    }

    /// Hard failures always propagate, regardless of policy.
    pub fn is_hard(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Column that is only partly representable in the target type
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Partial { .. })
    }
}

/// Result type alias for converters
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;
