//! External bundler command adapter.
//!
//! Runs a bundler as a child process: the resolved configuration is written
//! to the child's stdin as JSON, and stdout is expected to carry the native
//! JSON stats object. This is an adapter around an existing bundler binary,
//! not a bundler.

use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;

use anyhow::{Context, anyhow};
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::config::ConfigSet;

use super::{BundleInvocation, BundleStatsHandle, Bundler, JsonStats};

/// Bundler that shells out to an external command.
pub struct ProcessBundler {
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessBundler {
    /// Resolves `program` on `PATH` and prepares the adapter.
    ///
    /// Fails early when the bundler executable cannot be found, before any
    /// task work happens.
    pub fn new(program: &str, args: Vec<String>) -> anyhow::Result<Self> {
        let program = which::which(program)
            .with_context(|| format!("bundler command '{program}' not found on PATH"))?;
        log::debug!("Resolved bundler command: {}", program.display());

        Ok(Self { program, args })
    }

    async fn invoke(&self, payload: Vec<u8>) -> anyhow::Result<std::process::Output> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("spawning bundler {}", self.program.display()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(&payload)
                .await
                .context("writing bundler configuration to stdin")?;
            // Dropping stdin closes the pipe so the bundler sees EOF.
        }

        child
            .wait_with_output()
            .await
            .context("waiting for bundler to exit")
    }
}

impl Bundler for ProcessBundler {
    fn bundle(&self, config: &ConfigSet) -> impl Future<Output = BundleInvocation> + Send {
        async move {
            let payload = match serde_json::to_vec(config) {
                Ok(payload) => payload,
                Err(e) => {
                    return BundleInvocation {
                        error: Some(anyhow!(e).context("serializing bundler configuration")),
                        stats: None,
                    };
                }
            };

            let output = match self.invoke(payload).await {
                Ok(output) => output,
                Err(e) => return BundleInvocation { error: Some(e), stats: None },
            };

            let stats = serde_json::from_slice::<Value>(&output.stdout)
                .ok()
                .map(|value| Box::new(JsonStats::new(value)) as Box<dyn BundleStatsHandle>);

            let mut error = None;
            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                error = Some(anyhow!(
                    "bundler exited with {}: {}",
                    output.status,
                    stderr.trim()
                ));
            } else if stats.is_none() {
                error = Some(anyhow!("bundler produced no parsable stats output"));
            }

            BundleInvocation { error, stats }
        }
    }
}
