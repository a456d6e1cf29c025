// src/config/model.rs

use crate::command::CommandLine;
use crate::config::Interval;
use crate::exec::OutputMode;

/// Immutable configuration for one `watch` session.
///
/// Built once from the command line (see [`crate::config::load_from_args`])
/// and owned by the runtime for the rest of the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    /// Delay between the end of one run and the start of the next.
    pub interval: Interval,

    /// Discard the child's stdout. Its stderr stays attached.
    pub quiet: bool,

    /// Exit with the child's status on the first non-zero exit.
    pub halt_on_failure: bool,

    /// Shell command executed on every iteration.
    pub command_line: CommandLine,
}

impl WatchConfig {
    pub fn new(command_line: CommandLine) -> Self {
        Self {
            interval: Interval::default(),
            quiet: false,
            halt_on_failure: false,
            command_line,
        }
    }

    /// How the child's stdout should be wired.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Discard
        } else {
            OutputMode::Inherit
        }
    }
}
