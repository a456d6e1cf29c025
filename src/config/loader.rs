// src/config/loader.rs

use crate::cli::CliArgs;
use crate::command::CommandLine;
use crate::config::model::WatchConfig;
use crate::errors::Result;

/// Build the session configuration from parsed CLI arguments.
///
/// This is the only configuration source; there is no config file.
///
/// - Joins the trailing command tokens (rejecting an empty command).
/// - Copies the flags over unchanged. The interval was already validated by
///   the CLI value parser.
pub fn load_from_args(args: &CliArgs) -> Result<WatchConfig> {
    let command_line = CommandLine::from_tokens(&args.cmd)?;

    Ok(WatchConfig {
        interval: args.interval,
        quiet: args.quiet,
        halt_on_failure: args.halt,
        command_line,
    })
}
