use super::typeset::Typeset;
use crate::config::{Preset, TypesetConfig};
use crate::errors::Result;
use crate::features::relation_graph::{TypeNode, TypeRef};
use crate::features::resolution::Resolver;
use std::sync::Arc;

/// Builder for custom catalogues.
///
/// # Example
/// ```rust,ignore
/// let typeset = Typeset::builder()
///     .with_base(Generic)
///     .with_derivative(StringType)
///     .with_derivative(Integer)
///     .preset(Preset::Strict)
///     .build()?;
/// ```
#[derive(Default)]
pub struct TypesetBuilder {
    base: Vec<TypeRef>,
    derivative: Vec<TypeRef>,
    config: TypesetConfig,
    resolver: Option<Box<dyn Resolver>>,
}

impl TypesetBuilder {
    pub fn base(mut self, types: impl IntoIterator<Item = TypeRef>) -> Self {
        self.base.extend(types);
        self
    }

    pub fn derivative(mut self, types: impl IntoIterator<Item = TypeRef>) -> Self {
        self.derivative.extend(types);
        self
    }

    pub fn with_base(mut self, node: impl TypeNode + 'static) -> Self {
        self.base.push(Arc::new(node));
        self
    }

    pub fn with_derivative(mut self, node: impl TypeNode + 'static) -> Self {
        self.derivative.push(Arc::new(node));
        self
    }

    pub fn config(mut self, config: TypesetConfig) -> Self {
        self.config = config;
        self
    }

    pub fn preset(self, preset: Preset) -> Self {
        self.config(TypesetConfig::preset(preset))
    }

    /// Replace the default [`GraphResolver`](crate::features::resolution::GraphResolver).
    ///
    /// The configured conversion policy is not applied to a custom resolver.
    pub fn resolver(mut self, resolver: impl Resolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    pub fn build(self) -> Result<Typeset> {
        Typeset::from_parts(self.base, self.derivative, self.config, self.resolver)
    }
}

impl std::fmt::Debug for TypesetBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypesetBuilder")
            .field("base", &self.base.iter().map(|t| t.name()).collect::<Vec<_>>())
            .field(
                "derivative",
                &self.derivative.iter().map(|t| t.name()).collect::<Vec<_>>(),
            )
            .field("config", &self.config)
            .field("custom_resolver", &self.resolver.is_some())
            .finish()
    }
}
