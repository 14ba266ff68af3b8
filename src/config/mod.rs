//! Task configuration and bundler-config resolution.
//!
//! The bundler configuration itself is opaque JSON handed through to the
//! bundler; this module only decides *which* configuration a run uses. A
//! `configPath` pointing at an existing file always wins over an inline
//! `config`; a run with neither is an intentional skip.

use std::path::{Path, PathBuf};

use anyhow::Context;
use path_absolutize::Absolutize;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TaskError;

/// Default location probed for a configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "./bundle.config.json";

/// One or more bundler configuration objects.
///
/// A list configures a multi-target build; the objects themselves are opaque
/// to this crate and are passed through to the bundler unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigSet {
    // Multi first: untagged deserialization tries variants in order, and
    // `Single(Value)` would otherwise swallow arrays as well.
    Multi(Vec<Value>),
    Single(Value),
}

/// Caller-supplied task configuration.
///
/// Deserializes from the camelCase shape host pipelines use in task config
/// files (`configPath`, `config`, `suppressWarnings`, `printStats`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BundleTaskConfig {
    /// Path to a configuration file. Takes precedence over [`Self::config`]
    /// when the file exists. Explicitly set to `null` to disable probing.
    pub config_path: Option<PathBuf>,

    /// Inline configuration, used when `config_path` is unset or does not
    /// resolve to an existing file.
    pub config: Option<ConfigSet>,

    /// Patterns (regular expressions) matched against warning messages; a
    /// warning matching any pattern is dropped from output.
    pub suppress_warnings: Vec<String>,

    /// Whether to log one summary line per bundled output file.
    pub print_stats: bool,
}

impl Default for BundleTaskConfig {
    fn default() -> Self {
        Self {
            config_path: Some(PathBuf::from(DEFAULT_CONFIG_PATH)),
            config: None,
            suppress_warnings: Vec::new(),
            print_stats: true,
        }
    }
}

impl BundleTaskConfig {
    /// Applies the configuration precedence rule.
    ///
    /// Returns the configuration to bundle with, or `None` when the run
    /// should be skipped. A load or parse failure of an existing config file
    /// is fatal and is never retried.
    pub fn resolve(&self) -> Result<Option<ConfigSet>, TaskError> {
        if let Some(path) = &self.config_path {
            if path.is_file() {
                return load_config_file(path)
                    .map(Some)
                    .map_err(|source| TaskError::ConfigLoad { path: path.clone(), source });
            }
        }

        Ok(self.config.clone())
    }
}

/// Loads a configuration file (JSON, single object or array) from disk.
pub fn load_config_file(path: &Path) -> anyhow::Result<ConfigSet> {
    let resolved = path
        .absolutize()
        .with_context(|| format!("resolving config path {}", path.display()))?;
    let contents = std::fs::read_to_string(&resolved)
        .with_context(|| format!("reading {}", resolved.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", resolved.display()))
}
