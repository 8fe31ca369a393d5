//! # Configuration Schema and Parsing
//!
//! This module defines the data structures that represent the
//! `.unitygen.yaml` configuration file, as well as the logic for parsing it.
//!
//! ## Key Components
//!
//! - **`AggregationConfig`**: All knobs for one aggregation run — the byte
//!   threshold per unity file, PCH settings, output naming, and the
//!   forced-single-unit stress flag.
//!
//! ## Degenerate thresholds
//!
//! A zero byte threshold is deliberately not an error. It is treated as
//! "always force a single unity file", which keeps the tool usable under
//! degenerate configuration instead of failing a build over a tuning knob.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Path substring marking mechanically generated wrapper files.
///
/// Files whose path contains this marker must never share a unity file with
/// other sources unless single-unit mode is forced.
pub const DEFAULT_ISOLATION_MARKER: &str = ".GeneratedWrapper.";

/// Default soft cap on included bytes per unity file (256 KiB).
pub const DEFAULT_BYTES_PER_UNITY_FILE: u64 = 256 * 1024;

/// Configuration for one aggregation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Soft cap on the number of included bytes per unity file.
    ///
    /// A group closes once its accumulated bytes reach this cap. Zero means
    /// "always collapse everything into one unity file".
    #[serde(default = "default_bytes_per_unity_file")]
    pub bytes_per_unity_file: u64,

    /// Force exactly one unity file regardless of input size.
    #[serde(default)]
    pub stress_test_single_unit: bool,

    /// Whether precompiled headers are active for this module.
    #[serde(default)]
    pub pch_enabled: bool,

    /// Path of the header that seeds PCH creation, if any.
    ///
    /// When set (and `pch_enabled` is true), every generated unity file
    /// includes this header first, ahead of all member includes.
    #[serde(default)]
    pub pch_header_path: Option<PathBuf>,

    /// Directory the generated unity files are written to.
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,

    /// Base name used in generated file names (`Module.<BaseName>...cpp`).
    pub base_name: String,

    /// Whether a raw-path companion file is written next to each unity file
    /// for dependency extraction.
    #[serde(default)]
    pub requires_companion_file: bool,

    /// Multiplier applied to the byte threshold when deciding whether the
    /// whole module is small enough to collapse into a single unity file.
    ///
    /// The original tooling hard-coded 2; it is a policy constant, not an
    /// architectural requirement, so it is exposed here.
    #[serde(default = "default_single_unit_multiplier")]
    pub single_unit_multiplier: u64,

    /// Path substring that marks a source file as isolation-tagged.
    #[serde(default = "default_isolation_marker")]
    pub isolation_marker: String,
}

fn default_bytes_per_unity_file() -> u64 {
    DEFAULT_BYTES_PER_UNITY_FILE
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_single_unit_multiplier() -> u64 {
    2
}

fn default_isolation_marker() -> String {
    DEFAULT_ISOLATION_MARKER.to_string()
}

impl AggregationConfig {
    /// Create a configuration with defaults for everything but the base name.
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            bytes_per_unity_file: default_bytes_per_unity_file(),
            stress_test_single_unit: false,
            pch_enabled: false,
            pch_header_path: None,
            output_directory: default_output_directory(),
            base_name: base_name.into(),
            requires_companion_file: false,
            single_unit_multiplier: default_single_unit_multiplier(),
            isolation_marker: default_isolation_marker(),
        }
    }
}

/// Parse a YAML string into an `AggregationConfig`
pub fn parse(yaml_content: &str) -> Result<AggregationConfig> {
    serde_yaml::from_str(yaml_content).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some("expected fields like 'base_name', 'bytes_per_unity_file', 'output_directory'".to_string()),
    })
}

/// Load and parse an `AggregationConfig` from a file path
pub fn from_file(path: &Path) -> Result<AggregationConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigParse {
        message: format!("Failed to read '{}': {}", path.display(), e),
        hint: None,
    })?;
    parse(&content)
}
