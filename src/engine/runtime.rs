// src/engine/runtime.rs

use std::collections::VecDeque;
use std::future::Future;
use std::io::Write;
use std::time::Duration;

use anyhow::anyhow;
use tracing::{debug, info};

use crate::command::CommandLine;
use crate::config::WatchConfig;
use crate::engine::core::{CoreLoop, LoopPolicy};
use crate::engine::{LoopCommand, LoopEvent, Termination};
use crate::errors::Result;
use crate::exec::{ExecutorBackend, OutputMode};
use crate::report::FailureReporter;

/// The async IO shell around [`CoreLoop`].
///
/// Responsibilities:
/// - Spawn the command through the executor backend and wait for it.
/// - Print failure diagnostics.
/// - Sleep between runs.
/// - Stop when the core says so, or when `shutdown` resolves.
///
/// All decisions are made by the core; this type only performs them. At most
/// one child exists at a time.
pub struct Runtime<E, W>
where
    E: ExecutorBackend,
    W: Write,
{
    core: CoreLoop,
    command: CommandLine,
    output: OutputMode,
    executor: E,
    reporter: FailureReporter<W>,
}

impl<E, W> Runtime<E, W>
where
    E: ExecutorBackend,
    W: Write,
{
    pub fn new(config: &WatchConfig, executor: E, reporter: FailureReporter<W>) -> Self {
        Self {
            core: CoreLoop::new(LoopPolicy::from(config)),
            command: config.command_line.clone(),
            output: config.output_mode(),
            executor,
            reporter,
        }
    }

    /// Main loop.
    ///
    /// Returns only when a failure halts the loop or `shutdown` resolves.
    /// Spawn, wait, redirect and reporting failures are returned as errors.
    pub async fn run<S>(mut self, shutdown: S) -> Result<Termination>
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        info!(cmd = %self.command, output = ?self.output, "watch loop started");

        let mut pending = VecDeque::new();
        self.apply(LoopEvent::Start, &mut pending);

        while let Some(command) = pending.pop_front() {
            match command {
                LoopCommand::Spawn => {
                    let event = self.spawn_and_wait(&mut shutdown, &mut pending).await?;
                    self.apply(event, &mut pending);
                }
                LoopCommand::ReportFailure { exit_code } => {
                    self.reporter.report(exit_code)?;
                }
                LoopCommand::Sleep(interval) => {
                    let event = sleep_or_shutdown(interval, &mut shutdown).await;
                    self.apply(event, &mut pending);
                }
                LoopCommand::Exit(termination) => {
                    info!(
                        ?termination,
                        iterations = self.core.iterations(),
                        "watch loop exiting"
                    );
                    return Ok(termination);
                }
            }
        }

        Err(anyhow!("watch loop ran out of commands in state {:?}", self.core.state()).into())
    }

    /// Feed `event` to the core and queue the commands it returns.
    ///
    /// A step that stops the loop replaces whatever was still queued.
    fn apply(&mut self, event: LoopEvent, pending: &mut VecDeque<LoopCommand>) {
        let step = self.core.step(event);
        if !step.keep_running {
            pending.clear();
        }
        pending.extend(step.commands);
    }

    async fn spawn_and_wait<S>(
        &mut self,
        shutdown: &mut S,
        pending: &mut VecDeque<LoopCommand>,
    ) -> Result<LoopEvent>
    where
        S: Future<Output = ()> + Unpin,
    {
        debug!(
            iteration = self.core.iterations() + 1,
            cmd = %self.command,
            "starting run"
        );

        let wait = self.executor.spawn(&self.command, self.output)?;
        self.apply(LoopEvent::Spawned, pending);

        // Dropping `wait` on shutdown kills the child.
        tokio::select! {
            biased;
            outcome = wait => Ok(LoopEvent::Completed(outcome?)),
            _ = shutdown => Ok(LoopEvent::ShutdownRequested),
        }
    }
}

async fn sleep_or_shutdown<S>(interval: Duration, shutdown: &mut S) -> LoopEvent
where
    S: Future<Output = ()> + Unpin,
{
    tokio::select! {
        biased;
        _ = shutdown => LoopEvent::ShutdownRequested,
        _ = tokio::time::sleep(interval) => LoopEvent::SleepElapsed,
    }
}
