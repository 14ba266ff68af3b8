//! Error types for the bundle task.
//!
//! Configuration problems are fatal and fail the task; errors produced by the
//! bundle itself (compilation errors, warnings) are logged but never escalate
//! to a task failure.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bundle task operations
pub type Result<T> = std::result::Result<T, TaskError>;

/// Fatal task-level failures.
///
/// Everything else the runner encounters (bundler invocation errors, build
/// errors and warnings inside the result) is reduced to log output.
#[derive(Error, Debug)]
pub enum TaskError {
    /// The configuration file existed but could not be loaded or parsed
    #[error("Error parsing bundler config '{}': {source}", path.display())]
    ConfigLoad {
        /// Path the configuration was loaded from
        path: PathBuf,
        /// Underlying read or parse failure
        source: anyhow::Error,
    },

    /// A warning suppression pattern was not a valid regular expression
    #[error("Invalid warning suppression pattern: {0}")]
    Suppression(#[from] regex::Error),

    /// The bundler's native result could not be reduced to a plain summary
    #[error("Error processing bundler stats: {0}")]
    StatsProcessing(anyhow::Error),
}
