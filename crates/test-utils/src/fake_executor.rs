use std::collections::VecDeque;
use std::future::Future;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tokio::sync::oneshot;
use watch::command::CommandLine;
use watch::errors::{Result, WatchError};
use watch::exec::{ExecutorBackend, OutputMode, RunOutcome, WaitFuture};

/// One recorded call to [`FakeExecutor::spawn`].
#[derive(Debug, Clone)]
pub struct FakeRun {
    pub command: String,
    pub output: OutputMode,
    pub started_at: Instant,
    /// Set when the fake child "exits"; `None` if the wait was dropped.
    pub completed_at: Option<Instant>,
}

/// A fake executor that:
/// - records every spawn request
/// - "exits" with the next scripted exit code (the last code repeats once
///   the script runs out), after an optional simulated run time
/// - optionally fires a shutdown signal after a given number of runs
pub struct FakeExecutor {
    script: VecDeque<i32>,
    last_code: i32,
    run_time: Duration,
    fail_spawn: bool,
    runs: Arc<Mutex<Vec<FakeRun>>>,
    stop: Option<(usize, oneshot::Sender<()>)>,
}

impl FakeExecutor {
    /// Exit with `codes` in order, then keep repeating the last one.
    pub fn scripted(codes: Vec<i32>) -> Self {
        Self {
            last_code: codes.last().copied().unwrap_or(0),
            script: codes.into(),
            run_time: Duration::ZERO,
            fail_spawn: false,
            runs: Arc::new(Mutex::new(Vec::new())),
            stop: None,
        }
    }

    /// Exit with `code` on every run.
    pub fn always(code: i32) -> Self {
        Self::scripted(vec![code])
    }

    /// Every spawn fails as if the shell could not be started.
    pub fn failing_spawn() -> Self {
        Self {
            fail_spawn: true,
            ..Self::always(0)
        }
    }

    /// Make every fake child take `run_time` before it exits.
    pub fn with_run_time(mut self, run_time: Duration) -> Self {
        self.run_time = run_time;
        self
    }

    /// Shared handle to the recorded runs.
    pub fn runs(&self) -> Arc<Mutex<Vec<FakeRun>>> {
        Arc::clone(&self.runs)
    }

    /// Return a shutdown future that resolves once `runs` spawns have happened.
    pub fn stop_after(mut self, runs: usize) -> (Self, impl Future<Output = ()>) {
        let (tx, rx) = oneshot::channel();
        self.stop = Some((runs, tx));
        let shutdown = async move {
            let _ = rx.await;
        };
        (self, shutdown)
    }

    fn next_code(&mut self) -> i32 {
        self.script.pop_front().unwrap_or(self.last_code)
    }
}

impl ExecutorBackend for FakeExecutor {
    fn spawn(&mut self, command: &CommandLine, output: OutputMode) -> Result<WaitFuture> {
        if self.fail_spawn {
            return Err(WatchError::Spawn {
                command: command.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "fake spawn failure"),
            });
        }

        let index = {
            let mut guard = self.runs.lock().unwrap();
            guard.push(FakeRun {
                command: command.to_string(),
                output,
                started_at: Instant::now(),
                completed_at: None,
            });
            guard.len() - 1
        };

        if matches!(self.stop, Some((limit, _)) if index + 1 >= limit) {
            if let Some((_, tx)) = self.stop.take() {
                let _ = tx.send(());
            }
        }

        let outcome = RunOutcome::from_code(self.next_code());
        let run_time = self.run_time;
        let runs = Arc::clone(&self.runs);

        Ok(Box::pin(async move {
            if !run_time.is_zero() {
                tokio::time::sleep(run_time).await;
            }
            runs.lock().unwrap()[index].completed_at = Some(Instant::now());
            Ok(outcome)
        }))
    }
}
