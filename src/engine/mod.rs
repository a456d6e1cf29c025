// src/engine/mod.rs

//! Execution loop for watch.
//!
//! The loop repeatedly runs the configured command, reports failures, and
//! sleeps for the configured interval, until either a failure triggers a
//! halt or a shutdown is requested.
//!
//! The pure state machine lives in [`core`]; the async/IO shell that spawns
//! processes and sleeps is implemented in [`runtime`].

use std::time::Duration;

use crate::exec::RunOutcome;

/// Exit status used when the loop is stopped by Ctrl-C (128 + SIGINT).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Where the loop currently is within an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Nothing has run yet.
    Idle,
    /// A spawn has been requested.
    Running,
    /// The child exists and the loop is waiting for it to exit.
    Waiting,
    /// Delaying before the next spawn.
    Sleeping,
    /// A run failed while halt-on-failure was set. Terminal.
    Halted,
    /// An external shutdown request ended the loop. Terminal.
    Stopped,
}

impl LoopState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoopState::Halted | LoopState::Stopped)
    }
}

/// Events fed into the core by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    /// Begin the first iteration.
    Start,
    /// The child process was created.
    Spawned,
    /// The child process exited.
    Completed(RunOutcome),
    /// The interval delay finished.
    SleepElapsed,
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}

/// Actions the core asks the runtime to perform, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCommand {
    /// Spawn the configured command.
    Spawn,
    /// Print the failure diagnostic for a non-zero exit.
    ReportFailure { exit_code: i32 },
    /// Wait this long, then send [`LoopEvent::SleepElapsed`].
    Sleep(Duration),
    /// Stop the loop and end the process.
    Exit(Termination),
}

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A run failed with this exit code while halt-on-failure was set.
    Halted(i32),
    /// Shutdown was requested from outside.
    Interrupted,
}

impl Termination {
    /// Exit status the `watch` process should use.
    pub fn exit_code(&self) -> i32 {
        match self {
            Termination::Halted(code) => *code,
            Termination::Interrupted => INTERRUPTED_EXIT_CODE,
        }
    }
}

pub mod core;
pub mod runtime;

pub use self::core::{CoreLoop, CoreStep, LoopPolicy};
pub use runtime::Runtime;
