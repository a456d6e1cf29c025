// src/exec/outcome.rs

use std::process::ExitStatus;

/// Exit code reported for a child whose status carries neither a code nor a
/// signal. Matches what a shell reports for an unknown status.
const UNKNOWN_EXIT_CODE: i32 = 255;

/// Result of one child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    Failed(i32), // exit code
}

impl RunOutcome {
    /// Classify a raw exit code.
    pub fn from_code(code: i32) -> Self {
        if code == 0 {
            RunOutcome::Success
        } else {
            RunOutcome::Failed(code)
        }
    }

    /// Classify an OS exit status.
    ///
    /// A child killed by a signal on Unix is reported as `128 + signal`, the
    /// same number `sh` would put in `$?`. It counts as a failure, so it is
    /// reported and triggers `--halt`. Taking `WEXITSTATUS` of such a status
    /// would read 0 instead and treat the killed run as a success.
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::from_code(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return RunOutcome::Failed(128 + signal);
            }
        }

        RunOutcome::Failed(UNKNOWN_EXIT_CODE)
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Success => 0,
            RunOutcome::Failed(code) => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success)
    }
}
