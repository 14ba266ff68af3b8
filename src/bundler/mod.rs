//! Bundler collaborator interface.
//!
//! The bundler is an opaque external tool. This module defines the narrow
//! contract the runner needs from it: invoke once with a resolved
//! configuration, get back an optional invocation-level error plus an
//! optional handle onto the native result, and reduce that handle to a plain
//! [`BundleStats`] summary on demand.

mod process;
mod stats;

pub use process::ProcessBundler;
pub use stats::{BuildWarning, BundleStats, OutputChunk};

use std::future::Future;

use anyhow::Context;
use serde_json::Value;

use crate::config::ConfigSet;

/// Outcome of one bundler invocation.
///
/// Both fields may be present at once: a bundler can report a failure and
/// still produce a (partial) result.
pub struct BundleInvocation {
    /// Invocation-level failure reported by the bundler.
    pub error: Option<anyhow::Error>,
    /// Handle onto the bundler's native result, when one was produced.
    pub stats: Option<Box<dyn BundleStatsHandle>>,
}

/// Handle onto a bundler's native result object.
pub trait BundleStatsHandle: Send + Sync {
    /// The native result shape, opaque to this crate. Attached to the shared
    /// build properties for downstream tasks.
    fn raw(&self) -> Value;

    /// Reduces the native result to the plain summary shape, excluding the
    /// expensive hash and source payloads.
    fn summarize(&self) -> anyhow::Result<BundleStats>;
}

/// An external module bundler.
///
/// `bundle` is the single suspension point of a task run: it resolves exactly
/// once, and there is no timeout or cancellation — a hung bundler hangs the
/// task.
pub trait Bundler {
    fn bundle(&self, config: &ConfigSet) -> impl Future<Output = BundleInvocation> + Send;
}

/// Stats handle backed by a parsed JSON result object.
pub struct JsonStats {
    value: Value,
}

impl JsonStats {
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

impl BundleStatsHandle for JsonStats {
    fn raw(&self) -> Value {
        self.value.clone()
    }

    fn summarize(&self) -> anyhow::Result<BundleStats> {
        serde_json::from_value(self.value.clone())
            .context("bundler stats did not match the expected summary shape")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_stats_summarize_rejects_non_object_results() {
        let handle = JsonStats::new(json!("not a stats object"));
        assert!(handle.summarize().is_err());
    }

    #[test]
    fn json_stats_raw_preserves_the_native_shape() {
        let native = json!({ "hash": "abc", "errors": [], "custom": { "x": 1 } });
        let handle = JsonStats::new(native.clone());
        assert_eq!(handle.raw(), native);
    }
}
