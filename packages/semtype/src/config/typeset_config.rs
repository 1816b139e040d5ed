//! Typeset configuration

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, ConfigOverrides, SUPPORTED_VERSIONS};
use super::preset::Preset;
use super::validation::Validatable;
use crate::errors::ConversionError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do when a converter fails during inferential traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionPolicy {
    /// Every conversion failure makes the edge a non-match; only malformed
    /// columns propagate.
    Lenient,

    /// Partial conversions (some cells converted, others not) also
    /// propagate, once no sibling at the same level has matched.
    Strict,
}

impl ConversionPolicy {
    /// Decide whether a converter failure aborts resolution
    pub fn propagates(&self, err: &ConversionError) -> bool {
        err.is_hard() || (matches!(self, Self::Strict) && err.is_partial())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl Default for ConversionPolicy {
    fn default() -> Self {
        Self::Lenient
    }
}

/// Parallelism for frame-level operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallelConfig {
    /// Enable Rayon parallel iterator across columns
    pub enable_rayon: bool,

    /// Minimum number of columns before going parallel (1..=4096)
    pub min_columns: usize,
}

impl ParallelConfig {
    /// Get preset configuration
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Lenient => Self {
                enable_rayon: true,
                min_columns: 8,
            },
            Preset::Strict => Self {
                enable_rayon: false,
                min_columns: 8,
            },
        }
    }

    /// Whether a frame with `n_columns` columns should be processed in parallel
    pub fn should_parallelize(&self, n_columns: usize) -> bool {
        cfg!(feature = "parallel") && self.enable_rayon && n_columns >= self.min_columns
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl Validatable for ParallelConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.min_columns < 1 || self.min_columns > 4096 {
            return Err(ConfigError::range_with_hint(
                "min_columns",
                self.min_columns,
                1,
                4096,
                "Parallel threshold must be a reasonable column count",
            ));
        }
        Ok(())
    }
}

/// Complete typeset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypesetConfig {
    pub conversion_policy: ConversionPolicy,
    pub parallel: ParallelConfig,
}

impl Default for TypesetConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl TypesetConfig {
    /// Complete defaults for a preset
    pub fn preset(preset: Preset) -> Self {
        let conversion_policy = match preset {
            Preset::Lenient => ConversionPolicy::Lenient,
            Preset::Strict => ConversionPolicy::Strict,
        };

        Self {
            conversion_policy,
            parallel: ParallelConfig::from_preset(preset),
        }
    }

    pub fn with_conversion_policy(mut self, policy: ConversionPolicy) -> Self {
        self.conversion_policy = policy;
        self
    }

    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable rayon for frame operations
    pub fn sequential(mut self) -> Self {
        self.parallel.enable_rayon = false;
        self
    }

    /// Load from a YAML file (schema v1)
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from a YAML string (schema v1)
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;
        Self::from_export(export)
    }

    /// Load from a JSON string (schema v1)
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_json::from_str(content)?;
        Self::from_export(export)
    }

    fn from_export(export: ConfigExportV1) -> ConfigResult<Self> {
        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = match export.preset.as_deref() {
            Some(name) => Preset::from_str(name)?,
            None => Preset::default(),
        };

        let mut config = Self::preset(preset);
        if let Some(overrides) = export.overrides {
            if let Some(policy) = overrides.conversion_policy {
                config.conversion_policy = policy;
            }
            if let Some(parallel) = overrides.parallel {
                config.parallel = parallel;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Export as YAML (schema v1, every field as an override)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            preset: Some(Preset::default().to_string()),
            overrides: Some(ConfigOverrides {
                conversion_policy: Some(self.conversion_policy),
                parallel: Some(self.parallel.clone()),
            }),
        };

        Ok(serde_yaml::to_string(&export)?)
    }
}

impl Validatable for TypesetConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.parallel.validate()
    }
}
