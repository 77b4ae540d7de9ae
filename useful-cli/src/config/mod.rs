//! Configuration module
//!
//! Settings are read from an optional TOML file. Every section and field
//! falls back to its default, and command-line flags override the file.
//!
//! ```toml
//! [text]
//! comparison = "case-sensitive"
//!
//! [sequence]
//! partition_size = 25
//! separator = " | "
//!
//! [output]
//! format = "json"
//! pretty_json = false
//! ```

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use useful_core::sequence::DEFAULT_PARTITION_SIZE;
use useful_core::Comparison;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Text command configuration
    #[serde(default)]
    pub text: TextConfig,

    /// Sequence command configuration
    #[serde(default)]
    pub sequence: SequenceConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Text-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TextConfig {
    /// Comparison used when searching for needles
    pub comparison: Comparison,
}

/// Sequence-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Lines per partition
    pub partition_size: usize,

    /// Separator between partition items in text output
    pub separator: String,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            partition_size: DEFAULT_PARTITION_SIZE,
            separator: ",".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> CliResult<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load configuration from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        log::debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }
}
