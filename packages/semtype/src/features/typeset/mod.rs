//! Typeset: a type catalogue compiled into a relation graph, plus the
//! column- and frame-level operations built on the resolver.

mod builder;
mod presets;
mod typeset;

pub use builder::TypesetBuilder;
pub use presets::{complete_set, standard_set};
pub use typeset::{ColumnTypeMap, Typeset};
