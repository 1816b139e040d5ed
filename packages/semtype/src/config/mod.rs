//! Typeset configuration
//!
//! Two tiers:
//! - Preset: one-liner defaults (`TypesetConfig::preset(Preset::Strict)`)
//! - YAML/JSON: versioned schema with per-field overrides
//!
//! # Examples
//!
//! ```rust,ignore
//! use semtype::config::{ConversionPolicy, Preset, TypesetConfig};
//!
//! let config = TypesetConfig::preset(Preset::Lenient)
//!     .with_conversion_policy(ConversionPolicy::Strict);
//!
//! let config = TypesetConfig::from_yaml("typeset.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod preset;
pub mod typeset_config;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, ConfigOverrides};
pub use preset::Preset;
pub use typeset_config::{ConversionPolicy, ParallelConfig, TypesetConfig};
pub use validation::Validatable;
