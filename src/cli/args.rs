//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{BundleTaskConfig, ConfigSet, DEFAULT_CONFIG_PATH};

/// Runs a module bundler and reports its results
#[derive(Parser, Debug)]
#[command(
    name = "bundle_task",
    version,
    about = "Runs a module bundler and reports its results",
    long_about = "Resolves a bundler configuration, invokes the bundler command, and reduces its \
result into error blocks, filtered warning blocks, and per-file summary lines.

The bundler command receives the resolved configuration as JSON on stdin and must print its \
native JSON stats object on stdout.

Usage:
  bundle_task -- webpack-json
  bundle_task --config-path ./bundle.config.json --suppress-warning 'critical dependency' -- webpack-json
  bundle_task --config '{\"entry\": \"src/index.js\"}' --no-stats -- my-bundler --mode production

Exit code 0 = the task completed; bundle errors are logged, not escalated."
)]
pub struct Args {
    /// Path to a bundler configuration file (JSON object or array).
    ///
    /// Takes precedence over --config when the file exists. Defaults to
    /// ./bundle.config.json.
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config_path: Option<PathBuf>,

    /// Inline bundler configuration (JSON object or array)
    #[arg(long, value_name = "JSON")]
    pub config: Option<String>,

    /// Warning suppression pattern (regular expression); repeatable
    #[arg(long = "suppress-warning", value_name = "PATTERN", action = clap::ArgAction::Append)]
    pub suppress_warnings: Vec<String>,

    /// Skip the per-file bundle summary lines
    #[arg(long)]
    pub no_stats: bool,

    /// Output directory label used in error and warning blocks
    #[arg(long, value_name = "DIR", default_value = "dist")]
    pub dist: PathBuf,

    /// Bundler command and its arguments
    #[arg(value_name = "BUNDLER", trailing_var_arg = true, required = true, num_args = 1..)]
    pub bundler: Vec<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if let Some(raw) = &self.config {
            serde_json::from_str::<ConfigSet>(raw)
                .map_err(|e| format!("--config is not valid JSON: {e}"))?;
        }

        if self.bundler.is_empty() {
            return Err("Bundler command cannot be empty".to_string());
        }

        Ok(())
    }

    /// Builds the task configuration these arguments describe.
    pub fn task_config(&self) -> Result<BundleTaskConfig, String> {
        let config = match &self.config {
            Some(raw) => Some(
                serde_json::from_str(raw).map_err(|e| format!("--config is not valid JSON: {e}"))?,
            ),
            None => None,
        };

        Ok(BundleTaskConfig {
            config_path: Some(
                self.config_path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
            ),
            config,
            suppress_warnings: self.suppress_warnings.clone(),
            print_stats: !self.no_stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    #[test]
    fn minimal_invocation_uses_defaults() {
        let args = parse(&["bundle_task", "--", "my-bundler"]);
        let config = args.task_config().unwrap();

        assert_eq!(config.config_path, Some(PathBuf::from(DEFAULT_CONFIG_PATH)));
        assert!(config.print_stats);
        assert!(config.suppress_warnings.is_empty());
        assert_eq!(args.bundler, vec!["my-bundler"]);
    }

    #[test]
    fn bundler_arguments_are_passed_through() {
        let args = parse(&["bundle_task", "--", "my-bundler", "--mode", "production"]);
        assert_eq!(args.bundler, vec!["my-bundler", "--mode", "production"]);
    }

    #[test]
    fn inline_config_must_be_valid_json() {
        let args = parse(&["bundle_task", "--config", "{not json", "--", "my-bundler"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn suppress_warning_is_repeatable() {
        let args = parse(&[
            "bundle_task",
            "--suppress-warning",
            "one",
            "--suppress-warning",
            "two",
            "--",
            "my-bundler",
        ]);

        assert_eq!(args.task_config().unwrap().suppress_warnings, vec!["one", "two"]);
    }

    #[test]
    fn no_stats_disables_the_summary() {
        let args = parse(&["bundle_task", "--no-stats", "--", "my-bundler"]);
        assert!(!args.task_config().unwrap().print_stats);
    }
}
