//! Graph vertex: the synthetic root or a declared type

use super::type_node::TypeRef;
use crate::shared::models::Column;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Vertex of the relation graph and result of a resolution.
///
/// `Root` has no predicate (it matches everything) and is reported as
/// `Unknown` when resolution cannot go below it.
#[derive(Clone)]
pub enum GraphNode {
    Root,
    Type(TypeRef),
}

impl GraphNode {
    /// Display name of the root vertex; reserved in every typeset
    pub const ROOT_NAME: &'static str = "Unknown";

    pub fn name(&self) -> &str {
        match self {
            Self::Root => Self::ROOT_NAME,
            Self::Type(t) => t.name(),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    pub fn as_type(&self) -> Option<&TypeRef> {
        match self {
            Self::Root => None,
            Self::Type(t) => Some(t),
        }
    }

    /// Membership test; the root contains every column
    pub fn contains(&self, column: &Column) -> bool {
        match self {
            Self::Root => true,
            Self::Type(t) => t.contains(column),
        }
    }
}

impl PartialEq for GraphNode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Root, Self::Root) => true,
            (Self::Type(a), Self::Type(b)) => a.name() == b.name(),
            _ => false,
        }
    }
}

impl Eq for GraphNode {}

impl Hash for GraphNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_root().hash(state);
        self.name().hash(state);
    }
}

impl PartialEq<str> for GraphNode {
    fn eq(&self, other: &str) -> bool {
        self.name() == other
    }
}

impl PartialEq<&str> for GraphNode {
    fn eq(&self, other: &&str) -> bool {
        self.name() == *other
    }
}

impl fmt::Debug for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "Root"),
            Self::Type(t) => write!(f, "Type({})", t.name()),
        }
    }
}

impl fmt::Display for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
