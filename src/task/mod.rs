//! Bundle task runner.
//!
//! Resolves the configuration, invokes the bundler once, and reduces its
//! result into log blocks and a completion signal. Compilation errors inside
//! the bundle are reported, not escalated: the task fails only for
//! configuration problems or when the result cannot be summarized at all.

mod suppress;

pub use suppress::WarningFilter;

use std::path::Path;
use std::time::Instant;

use crate::bundler::{BundleStats, Bundler};
use crate::config::BundleTaskConfig;
use crate::context::BuildContext;
use crate::error::{Result, TaskError};

const MISSING_CONFIG_WARNING: &str = "No bundler configuration has been provided. \
    Create a bundle.config.json file or set \"configPath\": null in the task \
    configuration to disable bundling.";

/// Build-pipeline task that runs a module bundler and reports its results.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use bundle_task::{BuildContext, BundleTask, BundleTaskConfig, ProcessBundler};
/// use bundle_task::logging::EnvLog;
///
/// # async fn example() -> anyhow::Result<()> {
/// let bundler = ProcessBundler::new("webpack-json", vec![])?;
/// let mut ctx = BuildContext::new("dist", Arc::new(EnvLog));
///
/// let task = BundleTask::new(BundleTaskConfig::default());
/// task.run(&mut ctx, &bundler).await?;
/// # Ok(())
/// # }
/// ```
pub struct BundleTask {
    config: BundleTaskConfig,
}

impl BundleTask {
    pub fn new(config: BundleTaskConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BundleTaskConfig {
        &self.config
    }

    /// Runs the task to completion.
    ///
    /// `Ok(())` is the success completion signal; an `Err` carries the fatal
    /// failure message. A missing configuration is an intentional skip, not
    /// an error. Nothing is retried.
    pub async fn run<B: Bundler>(&self, ctx: &mut BuildContext, bundler: &B) -> Result<()> {
        let filter = WarningFilter::new(&self.config.suppress_warnings)?;

        let Some(config) = self.config.resolve()? else {
            ctx.log().warning(MISSING_CONFIG_WARNING);
            return Ok(());
        };

        let start = Instant::now();
        let invocation = bundler.bundle(&config).await;

        let stats = match invocation.stats {
            Some(handle) => {
                ctx.set_bundler_stats(handle.raw());

                match handle.summarize() {
                    Ok(stats) => Some(stats),
                    Err(e) => {
                        ctx.log().error(&format!("Error processing bundler stats: {e}"));
                        // Surface the invocation error too; it must not be
                        // swallowed just because summarizing failed.
                        if let Some(error) = &invocation.error {
                            ctx.log().error(&format!("Bundler error: {error}"));
                        }
                        return Err(TaskError::StatsProcessing(e));
                    }
                }
            }
            None => {
                if let Some(error) = &invocation.error {
                    ctx.log().error(&format!("Bundler error: {error}"));
                }
                None
            }
        };
        let elapsed_ms = start.elapsed().as_millis();

        if let Some(stats) = stats {
            let label = format!("'{}':", ctx.dist_dir().display());

            for unit in stats.units() {
                log_error_block(ctx, &label, unit);
                log_warning_block(ctx, &label, unit, &filter);
            }

            if self.config.print_stats {
                for unit in stats.units() {
                    for chunk in &unit.chunks {
                        for file in &chunk.files {
                            ctx.log().info(&format!(
                                "Bundled: '{}', size: {} bytes, took {} ms.",
                                base_name(file),
                                chunk.size,
                                elapsed_ms
                            ));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

fn log_error_block(ctx: &BuildContext, label: &str, unit: &BundleStats) {
    if unit.errors.is_empty() {
        return;
    }

    ctx.log()
        .error(&format!("{label}\n{}\n", unit.errors.join("\n")));
}

fn log_warning_block(ctx: &BuildContext, label: &str, unit: &BundleStats, filter: &WarningFilter) {
    let survivors: Vec<String> = unit
        .warnings
        .iter()
        .filter(|warning| !filter.is_suppressed(&warning.message))
        .map(|warning| match &warning.loc {
            Some(loc) => format!("{loc}: {}", warning.message),
            None => warning.message.clone(),
        })
        .collect();

    if survivors.is_empty() {
        return;
    }

    ctx.log()
        .warning(&format!("{label}\n{}\n", survivors.join("\n")));
}

fn base_name(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}
