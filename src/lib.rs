//! Build-pipeline bundle task.
//!
//! Given a bundler configuration (a file path to load, or inline
//! configuration objects), this crate invokes an external module bundler,
//! waits for its result, and reduces that result into a pass/fail completion
//! signal, filtered warning blocks, and optional per-file size/timing
//! summary lines.
//!
//! It can be used both as a CLI tool and as a library dependency inside a
//! build pipeline.

pub mod bundler;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod task;

// Re-export commonly used types
pub use bundler::{
    BundleInvocation, BundleStats, BundleStatsHandle, Bundler, BuildWarning, OutputChunk,
    ProcessBundler,
};
pub use config::{BundleTaskConfig, ConfigSet};
pub use context::{BUNDLER_STATS_KEY, BuildContext};
pub use error::{Result, TaskError};
pub use task::{BundleTask, WarningFilter};
