// src/report.rs

//! Failure diagnostics printed by the loop itself.
//!
//! These are written even in quiet mode: `--quiet` only silences the child's
//! stdout, never the loop's own status reporting.

use std::io::{self, IsTerminal, Stderr, Write};

use colored::Colorize;

/// Writes the `exit: <code>` line (plus a blank line) for failed runs.
///
/// The line is gray when colour is enabled.
pub struct FailureReporter<W: Write> {
    out: W,
    color: bool,
}

impl FailureReporter<Stderr> {
    /// Reporter on the process's stderr.
    ///
    /// Colour follows stderr, not stdout: it is on when stderr is a terminal
    /// and `NO_COLOR` is unset.
    pub fn stderr() -> Self {
        let stderr = io::stderr();
        let color = color_enabled(stderr.is_terminal(), std::env::var_os("NO_COLOR").is_some());
        // `colored` looks at stdout by default; pin it to the stderr decision.
        colored::control::set_override(color);
        Self::with_color(stderr, color)
    }
}

impl<W: Write> FailureReporter<W> {
    /// Plain-text reporter, as used for non-terminal sinks.
    pub fn new(out: W) -> Self {
        Self::with_color(out, false)
    }

    pub fn with_color(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn report(&mut self, exit_code: i32) -> io::Result<()> {
        let line = format!("exit: {exit_code}");
        if self.color {
            writeln!(self.out, "{}\n", line.bright_black())?;
        } else {
            writeln!(self.out, "{line}\n")?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Whether diagnostics on a stream should be coloured.
pub fn color_enabled(is_terminal: bool, no_color: bool) -> bool {
    is_terminal && !no_color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_report_is_exit_code_and_blank_line() {
        let mut reporter = FailureReporter::new(Vec::new());
        reporter.report(7).unwrap();

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(text, "exit: 7\n\n");
    }

    #[test]
    fn colored_report_is_gray() {
        colored::control::set_override(true);

        let mut reporter = FailureReporter::with_color(Vec::new(), true);
        reporter.report(3).unwrap();

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(text, "\u{1b}[90mexit: 3\u{1b}[0m\n\n");
    }

    #[test]
    fn color_follows_the_stream_being_written() {
        assert!(color_enabled(true, false));
        assert!(!color_enabled(false, false));
        assert!(!color_enabled(true, true));
    }
}
