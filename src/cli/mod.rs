//! Command line interface for the bundle task.
//!
//! Wires the task runner to a [`ProcessBundler`] and an `env_logger`-backed
//! sink so the task can run standalone, outside a host build pipeline.

mod args;

pub use args::Args;

use std::sync::Arc;

use crate::bundler::ProcessBundler;
use crate::context::BuildContext;
use crate::error::Result;
use crate::logging::EnvLog;
use crate::task::BundleTask;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    run_with_args(Args::parse_args()).await
}

async fn run_with_args(args: Args) -> Result<i32> {
    if let Err(message) = args.validate() {
        log::error!("{message}");
        return Ok(2);
    }

    let task_config = match args.task_config() {
        Ok(config) => config,
        Err(message) => {
            log::error!("{message}");
            return Ok(2);
        }
    };

    let Some((program, rest)) = args.bundler.split_first() else {
        log::error!("Bundler command cannot be empty");
        return Ok(2);
    };

    let bundler = match ProcessBundler::new(program, rest.to_vec()) {
        Ok(bundler) => bundler,
        Err(e) => {
            log::error!("{e:#}");
            return Ok(2);
        }
    };

    let mut ctx = BuildContext::new(args.dist.clone(), Arc::new(EnvLog));
    let task = BundleTask::new(task_config);

    match task.run(&mut ctx, &bundler).await {
        Ok(()) => Ok(0),
        Err(e) => {
            log::error!("{e}");
            Ok(1)
        }
    }
}
