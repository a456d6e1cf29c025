// src/engine/core.rs

//! Pure core loop state machine.
//!
//! The core consumes [`LoopEvent`]s and produces:
//! - an updated [`LoopState`]
//! - a list of [`LoopCommand`]s describing what the IO shell should do next
//!
//! It has no Tokio types, no processes and no clocks, so every transition
//! can be unit tested directly.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::WatchConfig;
use crate::engine::{LoopCommand, LoopEvent, LoopState, Termination};
use crate::exec::RunOutcome;

/// The parts of the configuration that drive loop decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopPolicy {
    pub interval: Duration,
    pub halt_on_failure: bool,
}

impl From<&WatchConfig> for LoopPolicy {
    fn from(cfg: &WatchConfig) -> Self {
        Self {
            interval: cfg.interval.as_duration(),
            halt_on_failure: cfg.halt_on_failure,
        }
    }
}

/// Output of a single [`CoreLoop::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreStep {
    pub commands: Vec<LoopCommand>,
    pub keep_running: bool,
}

impl CoreStep {
    fn run(commands: Vec<LoopCommand>) -> Self {
        Self {
            commands,
            keep_running: true,
        }
    }

    fn stop(mut commands: Vec<LoopCommand>, termination: Termination) -> Self {
        commands.push(LoopCommand::Exit(termination));
        Self {
            commands,
            keep_running: false,
        }
    }

    fn nothing() -> Self {
        Self::run(Vec::new())
    }
}

/// Pure execution loop state.
#[derive(Debug)]
pub struct CoreLoop {
    policy: LoopPolicy,
    state: LoopState,
    iterations: u64,
}

impl CoreLoop {
    pub fn new(policy: LoopPolicy) -> Self {
        Self {
            policy,
            state: LoopState::Idle,
            iterations: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of runs that have completed so far.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Handle a single event, updating state and returning the commands for
    /// the IO shell.
    pub fn step(&mut self, event: LoopEvent) -> CoreStep {
        if self.state.is_terminal() {
            warn!(state = ?self.state, ?event, "event received after loop ended; ignoring");
            return CoreStep {
                commands: Vec::new(),
                keep_running: false,
            };
        }

        match (self.state, event) {
            (_, LoopEvent::ShutdownRequested) => {
                info!(iterations = self.iterations, "shutdown requested, stopping loop");
                self.state = LoopState::Stopped;
                CoreStep::stop(Vec::new(), Termination::Interrupted)
            }
            (LoopState::Idle, LoopEvent::Start) | (LoopState::Sleeping, LoopEvent::SleepElapsed) => {
                self.state = LoopState::Running;
                CoreStep::run(vec![LoopCommand::Spawn])
            }
            (LoopState::Running, LoopEvent::Spawned) => {
                self.state = LoopState::Waiting;
                CoreStep::nothing()
            }
            (LoopState::Waiting, LoopEvent::Completed(outcome)) => self.handle_completion(outcome),
            (state, event) => {
                warn!(?state, ?event, "event not valid in current state; ignoring");
                CoreStep::nothing()
            }
        }
    }

    fn handle_completion(&mut self, outcome: RunOutcome) -> CoreStep {
        self.iterations += 1;
        debug!(
            iteration = self.iterations,
            exit_code = outcome.exit_code(),
            success = outcome.is_success(),
            "run completed"
        );

        let mut commands = Vec::new();

        if let RunOutcome::Failed(exit_code) = outcome {
            commands.push(LoopCommand::ReportFailure { exit_code });

            if self.policy.halt_on_failure {
                info!(exit_code, "run failed with halt-on-failure set; halting");
                self.state = LoopState::Halted;
                return CoreStep::stop(commands, Termination::Halted(exit_code));
            }
        }

        self.state = LoopState::Sleeping;
        commands.push(LoopCommand::Sleep(self.policy.interval));
        CoreStep::run(commands)
    }
}
