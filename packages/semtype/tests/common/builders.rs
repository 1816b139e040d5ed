//! Test type nodes and typeset builders

use semtype::features::types::{ComplexType, Integer};
use semtype::{
    Column, ConversionError, ConversionResult, RelationConfig, Result, TypeNode, Typeset,
    Value,
};

pub type Pred = fn(&Column) -> bool;
pub type Conv = fn(&Column) -> ConversionResult<Column>;

pub fn always(_: &Column) -> bool {
    true
}

pub fn never(_: &Column) -> bool {
    false
}

/// Configurable node: predicate, optional converter, inferential relations.
#[derive(Clone)]
pub struct TestNode {
    pub name: String,
    pub pred: Pred,
    pub conv: Option<Conv>,
    pub relations: Vec<RelationConfig>,
}

impl TestNode {
    pub fn new(name: &str, pred: Pred) -> Self {
        Self {
            name: name.to_string(),
            pred,
            conv: None,
            relations: Vec::new(),
        }
    }

    pub fn converter(mut self, conv: Conv) -> Self {
        self.conv = Some(conv);
        self
    }

    pub fn relates_to(mut self, target: &str) -> Self {
        self.relations.push(RelationConfig::inferential(target));
        self
    }

    pub fn detects(mut self, target: &str) -> Self {
        self.relations.push(RelationConfig::detection_only(target));
        self
    }
}

impl std::fmt::Debug for TestNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestNode").field("name", &self.name).finish()
    }
}

impl TypeNode for TestNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn contains(&self, column: &Column) -> bool {
        (self.pred)(column)
    }

    fn convert(&self, column: &Column) -> ConversionResult<Column> {
        match self.conv {
            Some(conv) => conv(column),
            None => Err(ConversionError::no_converter(&self.name)),
        }
    }

    fn relations(&self) -> Vec<RelationConfig> {
        self.relations.clone()
    }
}

/// Drops the last row: a structurally broken converter.
pub fn truncating(column: &Column) -> ConversionResult<Column> {
    let mut out = column.clone();
    out.values.pop();
    Ok(out)
}

pub fn all_ints(column: &Column) -> bool {
    column.all_non_null(|v| matches!(v, Value::Int(_)))
}

/// Base `{Integer, String}` with String accepting everything and refining
/// to Integer, then Complex, by parsing.
pub fn build_integer_string_typeset() -> Result<Typeset> {
    let fallback_string = TestNode::new("String", always)
        .relates_to("Integer")
        .relates_to("Complex");

    Typeset::builder()
        .with_base(Integer)
        .with_base(fallback_string)
        .with_derivative(ComplexType)
        .build()
}

/// `A -> B -> C -> A` under a base `A`
pub fn build_cyclic_typeset() -> Result<Typeset> {
    Typeset::builder()
        .with_base(TestNode::new("A", always).relates_to("B"))
        .with_derivative(TestNode::new("B", always).relates_to("C"))
        .with_derivative(TestNode::new("C", always).relates_to("A"))
        .build()
}
