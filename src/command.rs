// src/command.rs

//! Turn trailing CLI tokens into a single shell command string.
//!
//! Tokens are joined with one space and handed to the shell verbatim. No
//! quoting or escaping is applied, so a token containing spaces or shell
//! metacharacters is re-interpreted by the shell. That matches what users of
//! `watch 'cmd | other'` and `watch cmd \| other` expect.

use std::fmt;

use crate::errors::{Result, WatchError};

/// Separator placed between command tokens.
pub const TOKEN_SEPARATOR: &str = " ";

/// A non-empty command string ready to be passed to `sh -c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine(String);

impl CommandLine {
    /// Join `tokens` into one command line.
    ///
    /// Fails with [`WatchError::Usage`] when there are no tokens at all.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        if tokens.is_empty() {
            return Err(WatchError::Usage("<cmd> required".to_string()));
        }

        let joined = tokens
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(TOKEN_SEPARATOR);

        Ok(Self(joined))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
