//! Shared build state owned by the surrounding pipeline.
//!
//! A [`BuildContext`] carries the pieces of framework state the bundle task is
//! allowed to touch: the output directory name used to label log blocks, the
//! logging sink, and a properties map into which the task writes exactly one
//! entry (the raw bundler stats) for downstream tasks to inspect.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;

use crate::logging::TaskLog;

/// Well-known properties key under which the raw bundler result is attached.
pub const BUNDLER_STATS_KEY: &str = "bundlerStats";

/// Framework-owned state handed to the bundle task for one run.
///
/// The framework runs one task at a time, so no synchronization is needed
/// around the properties map.
pub struct BuildContext {
    dist_dir: PathBuf,
    properties: HashMap<String, Value>,
    log: Arc<dyn TaskLog>,
}

impl BuildContext {
    pub fn new(dist_dir: impl Into<PathBuf>, log: Arc<dyn TaskLog>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
            properties: HashMap::new(),
            log,
        }
    }

    /// Output directory used to label error and warning blocks.
    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    pub fn log(&self) -> &dyn TaskLog {
        self.log.as_ref()
    }

    /// Reads a build property attached by an earlier task.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Attaches the bundler's native result under [`BUNDLER_STATS_KEY`].
    ///
    /// The shape of the value is the bundler's own and is opaque to this
    /// crate; later pipeline tasks may inspect it.
    pub(crate) fn set_bundler_stats(&mut self, raw: Value) {
        self.properties.insert(BUNDLER_STATS_KEY.to_string(), raw);
    }
}
