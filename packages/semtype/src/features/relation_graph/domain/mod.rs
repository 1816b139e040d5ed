pub mod graph_node;
pub mod relation;
pub mod type_node;

pub use graph_node::GraphNode;
pub use relation::{ConvertFn, EdgeConverter, Relation, RelationConfig};
pub use type_node::{TypeNode, TypeRef};
