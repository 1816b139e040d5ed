//! Custom test assertions

use semtype::{ColumnTypeMap, GraphNode};

/// Assert every listed column resolved to the expected type name
pub fn assert_types(map: &ColumnTypeMap, expected: &[(&str, &str)]) {
    for (column, type_name) in expected {
        let node = map
            .get(*column)
            .unwrap_or_else(|| panic!("column '{column}' missing from type map"));
        assert_eq!(
            node.name(),
            *type_name,
            "column '{column}' resolved to {node}, expected {type_name}"
        );
    }
}

/// Assert every column in the map resolved to the same type
pub fn assert_all_types(map: &ColumnTypeMap, type_name: &str) {
    for (column, node) in map {
        assert_eq!(
            node.name(),
            type_name,
            "column '{column}' resolved to {node}, expected {type_name}"
        );
    }
}

pub fn assert_root(node: &GraphNode) {
    assert!(node.is_root(), "expected {}, got {node}", GraphNode::ROOT_NAME);
}
