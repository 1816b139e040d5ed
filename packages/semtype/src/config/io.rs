//! Configuration I/O schema (YAML/JSON)
//!
//! Defines the serialized schema types. Loading lives in typeset_config.rs.

use super::typeset_config::{ConversionPolicy, ParallelConfig};
use serde::{Deserialize, Serialize};

/// Currently supported schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Base preset (defaults to lenient)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Field overrides applied on top of the preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ConfigOverrides>,
}

/// Configuration overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_policy: Option<ConversionPolicy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<ParallelConfig>,
}
