// src/exec/shell.rs

//! Production executor that runs the command through the platform shell.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, trace};

use crate::command::CommandLine;
use crate::errors::{Result, WatchError};
use crate::exec::backend::{ExecutorBackend, OutputMode, WaitFuture};
use crate::exec::RunOutcome;

/// Write-only sink that discards everything written to it.
#[cfg(windows)]
pub const NULL_SINK: &str = "NUL";
#[cfg(not(windows))]
pub const NULL_SINK: &str = "/dev/null";

/// Spawns `sh -c <cmd>` (or `cmd /C <cmd>` on Windows) for every run.
///
/// stdin and stderr are inherited from the parent. stdout is inherited or
/// sent to [`NULL_SINK`] depending on the [`OutputMode`].
#[derive(Debug, Default)]
pub struct ShellExecutor;

impl ShellExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutorBackend for ShellExecutor {
    fn spawn(&mut self, command: &CommandLine, output: OutputMode) -> Result<WaitFuture> {
        let mut cmd = shell_command(command);

        let stdout = match output {
            OutputMode::Inherit => Stdio::inherit(),
            OutputMode::Discard => Stdio::from(open_null_sink(Path::new(NULL_SINK))?),
        };

        cmd.stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        let mut child = cmd.spawn().map_err(|source| WatchError::Spawn {
            command: command.to_string(),
            source,
        })?;

        debug!(pid = ?child.id(), cmd = %command, ?output, "spawned child process");

        let command = command.to_string();
        Ok(Box::pin(async move {
            let status = child
                .wait()
                .await
                .map_err(|source| WatchError::Wait {
                    command: command.clone(),
                    source,
                })?;

            trace!(cmd = %command, ?status, "child process exited");
            Ok(RunOutcome::from_status(status))
        }))
    }
}

/// Build a shell command appropriate for the platform.
fn shell_command(command: &CommandLine) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command.as_str());
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command.as_str());
        c
    }
}

/// Open the sink used for quiet mode.
pub fn open_null_sink(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|source| WatchError::Redirect {
            path: path.to_path_buf(),
            source,
        })
}
