//! Bundle task CLI - runs a module bundler and reports its results.

use std::process;

use env_logger::Env;

#[tokio::main]
async fn main() {
    // Task output is log lines; show info and above unless overridden.
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let exit_code = match bundle_task::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    };

    process::exit(exit_code);
}
