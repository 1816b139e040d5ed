//! Ready-made catalogues

use super::builder::TypesetBuilder;
use super::typeset::Typeset;
use crate::config::TypesetConfig;
use crate::errors::Result;
use crate::features::types::{
    Boolean, Categorical, ComplexType, DateTime, Float, Generic, Integer, IpAddress, Object,
    StringType,
};

fn standard_builder(config: TypesetConfig) -> TypesetBuilder {
    Typeset::builder()
        .with_base(Generic)
        .with_derivative(Categorical)
        .with_derivative(Boolean)
        .with_derivative(Integer)
        .with_derivative(Float)
        .with_derivative(ComplexType)
        .with_derivative(DateTime)
        .with_derivative(StringType)
        .with_derivative(Object)
        .config(config)
}

/// Generic plus the common scalar types and Object.
pub fn standard_set(config: TypesetConfig) -> Result<Typeset> {
    standard_builder(config).build()
}

/// [`standard_set`] plus IpAddress.
pub fn complete_set(config: TypesetConfig) -> Result<Typeset> {
    standard_builder(config).with_derivative(IpAddress).build()
}

impl Typeset {
    pub fn standard() -> Result<Self> {
        standard_set(TypesetConfig::default())
    }

    pub fn complete() -> Result<Self> {
        complete_set(TypesetConfig::default())
    }
}
