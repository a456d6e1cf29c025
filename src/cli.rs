// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Options must come before the command. An unrecognised flag in that
//! position is a usage error. Once the first command token has been seen,
//! everything after it (including tokens that look like flags) is passed
//! through to the shell untouched.

use std::ffi::OsString;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::Interval;

/// Exit status used for usage errors, `--help` and `--version`.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Command-line arguments for `watch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "watch",
    version,
    about = "Execute a command periodically.",
    long_about = None,
    disable_version_flag = true,
    arg_required_else_help = true
)]
pub struct CliArgs {
    /// Only output stderr.
    #[arg(short, long)]
    pub quiet: bool,

    /// Halt on failure.
    #[arg(short = 'x', long)]
    pub halt: bool,

    /// Interval in seconds, or milliseconds with an `ms` suffix.
    #[arg(
        short,
        long,
        value_name = "N",
        default_value = "1",
        value_parser = Interval::parse
    )]
    pub interval: Interval,

    /// Output version number.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// The command to run, joined with spaces and passed to the shell.
    #[arg(
        value_name = "CMD",
        required = true,
        num_args = 1..,
        trailing_var_arg = true
    )]
    pub cmd: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parse arguments from an explicit iterator.
///
/// The first item is the binary name, as with `std::env::args_os()`.
pub fn try_parse_from<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(args)
}

/// Parse the process arguments.
///
/// Any clap outcome that is not a successful parse, including `--help` and
/// `--version`, prints clap's message and exits with [`USAGE_EXIT_CODE`].
pub fn parse() -> CliArgs {
    match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(USAGE_EXIT_CODE);
        }
    }
}
