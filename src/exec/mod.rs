// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the configured command
//! through the platform shell, using `tokio::process::Command`, and handing
//! the exit status back to the runtime as a [`RunOutcome`].
//!
//! - [`backend`] provides the `ExecutorBackend` trait the runtime talks to,
//!   which tests can replace with a fake implementation.
//! - [`shell`] is the production backend that spawns `sh -c <cmd>`.
//! - [`outcome`] classifies child exit statuses.

pub mod backend;
pub mod outcome;
pub mod shell;

pub use backend::{ExecutorBackend, OutputMode, WaitFuture};
pub use outcome::RunOutcome;
pub use shell::ShellExecutor;
