// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The runtime talks to an `ExecutorBackend` instead of spawning processes
//! itself. Production code uses [`ShellExecutor`](super::ShellExecutor);
//! tests provide a backend that returns scripted exit codes without touching
//! the OS.
//!
//! Spawning and waiting are split on purpose: `spawn` returns as soon as the
//! child exists, and the returned [`WaitFuture`] resolves once it exits. The
//! runtime can therefore tell a spawn failure from a wait failure, and can
//! drop the wait when a shutdown arrives.

use std::future::Future;
use std::pin::Pin;

use crate::command::CommandLine;
use crate::errors::Result;
use crate::exec::RunOutcome;

/// Future resolving to the outcome of a spawned child.
pub type WaitFuture = Pin<Box<dyn Future<Output = Result<RunOutcome>> + Send>>;

/// Where the child's stdout goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Share the parent's stdout.
    Inherit,
    /// Send stdout to the platform null sink.
    Discard,
}

/// Trait abstracting how a command is executed.
pub trait ExecutorBackend: Send {
    /// Start `command` and return a future that completes when it exits.
    ///
    /// The child's stderr must always stay attached to the parent's stderr;
    /// `output` only affects stdout.
    fn spawn(&mut self, command: &CommandLine, output: OutputMode) -> Result<WaitFuture>;
}
