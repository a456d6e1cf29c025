// src/lib.rs

pub mod cli;
pub mod command;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod report;

use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::config::load_from_args;
use crate::engine::Runtime;
use crate::errors::Result;
use crate::exec::ShellExecutor;
use crate::report::FailureReporter;

pub use crate::engine::Termination;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config construction from CLI args
/// - the shell executor
/// - the failure reporter on stderr
/// - Ctrl-C handling
///
/// Only returns when the loop halts on a failure or is interrupted.
pub async fn run(args: CliArgs) -> Result<Termination> {
    let cfg = load_from_args(&args)?;

    info!(
        cmd = %cfg.command_line,
        interval = %cfg.interval,
        quiet = cfg.quiet,
        halt_on_failure = cfg.halt_on_failure,
        "configuration loaded"
    );

    let runtime = Runtime::new(&cfg, ShellExecutor::new(), FailureReporter::stderr());
    runtime.run(ctrl_c()).await
}

/// Resolves on Ctrl-C. Never resolves if the signal handler can't be installed.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
