//! Relations: directed edges between type nodes

use super::type_node::TypeRef;
use crate::errors::{ConversionError, ConversionResult};
use crate::shared::models::Column;
use std::fmt;
use std::sync::Arc;

/// Converter attached to a single relation
pub type ConvertFn = Arc<dyn Fn(&Column) -> ConversionResult<Column> + Send + Sync>;

/// Relation as declared by the source node, keyed by target name.
#[derive(Clone)]
pub struct RelationConfig {
    pub target: String,
    pub inferential: bool,
    pub converter: Option<ConvertFn>,
}

impl RelationConfig {
    /// Edge usable for conversion; crosses with the target's own converter
    /// unless [`with_converter`](Self::with_converter) overrides it.
    pub fn inferential(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            inferential: true,
            converter: None,
        }
    }

    /// Edge crossed only on a direct predicate match, never converting.
    pub fn detection_only(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            inferential: false,
            converter: None,
        }
    }

    pub fn with_converter(
        mut self,
        f: impl Fn(&Column) -> ConversionResult<Column> + Send + Sync + 'static,
    ) -> Self {
        self.converter = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for RelationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationConfig")
            .field("target", &self.target)
            .field("inferential", &self.inferential)
            .field("custom_converter", &self.converter.is_some())
            .finish()
    }
}

/// How a relation converts when crossed inferentially
#[derive(Clone)]
pub enum EdgeConverter {
    /// Use the target node's `convert`
    Target,
    /// Relation-specific converter
    Custom(ConvertFn),
    /// Never converts (root edges)
    Disabled,
}

/// Compiled edge stored in the relation graph
#[derive(Clone)]
pub struct Relation {
    target: TypeRef,
    inferential: bool,
    converter: EdgeConverter,
}

impl Relation {
    pub(crate) fn from_config(target: TypeRef, config: RelationConfig) -> Self {
        let converter = match config.converter {
            Some(f) => EdgeConverter::Custom(f),
            None => EdgeConverter::Target,
        };

        Self {
            target,
            inferential: config.inferential,
            converter,
        }
    }

    /// Edge from the synthetic root to a base type
    pub(crate) fn root(target: TypeRef) -> Self {
        Self {
            target,
            inferential: true,
            converter: EdgeConverter::Disabled,
        }
    }

    pub fn target(&self) -> &TypeRef {
        &self.target
    }

    pub fn is_inferential(&self) -> bool {
        self.inferential
    }

    pub fn converter(&self) -> &EdgeConverter {
        &self.converter
    }

    /// Convert a column across this edge
    pub fn convert(&self, column: &Column) -> ConversionResult<Column> {
        match &self.converter {
            EdgeConverter::Target => self.target.convert(column),
            EdgeConverter::Custom(f) => f(column),
            EdgeConverter::Disabled => Err(ConversionError::no_converter(self.target.name())),
        }
    }
}

impl fmt::Debug for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converter = match self.converter {
            EdgeConverter::Target => "target",
            EdgeConverter::Custom(_) => "custom",
            EdgeConverter::Disabled => "disabled",
        };
        f.debug_struct("Relation")
            .field("target", &self.target.name())
            .field("inferential", &self.inferential)
            .field("converter", &converter)
            .finish()
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inferential {
            write!(f, "inferential")
        } else {
            write!(f, "detection")
        }
    }
}
