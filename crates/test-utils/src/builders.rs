#![allow(dead_code)]

use watch::command::CommandLine;
use watch::config::{Interval, WatchConfig};

/// Builder for `WatchConfig` to simplify test setup.
///
/// Defaults to a 1ms interval so loops spin quickly.
pub struct WatchConfigBuilder {
    config: WatchConfig,
}

impl WatchConfigBuilder {
    pub fn new(cmd: &str) -> Self {
        let command_line =
            CommandLine::from_tokens(&[cmd]).expect("single token is never empty");
        let mut config = WatchConfig::new(command_line);
        config.interval = Interval::from_millis(1).expect("1ms is a valid interval");
        Self { config }
    }

    pub fn interval_ms(mut self, millis: u64) -> Self {
        self.config.interval = Interval::from_millis(millis).expect("interval must be > 0");
        self
    }

    pub fn quiet(mut self, val: bool) -> Self {
        self.config.quiet = val;
        self
    }

    pub fn halt_on_failure(mut self, val: bool) -> Self {
        self.config.halt_on_failure = val;
        self
    }

    pub fn build(self) -> WatchConfig {
        self.config
    }
}
