// src/config/mod.rs

//! Configuration for a `watch` session.
//!
//! Responsibilities:
//! - Define the immutable runtime configuration (`model.rs`).
//! - Parse and validate interval arguments (`interval.rs`).
//! - Build a validated config from parsed CLI arguments (`loader.rs`).

pub mod interval;
pub mod loader;
pub mod model;

pub use interval::{DEFAULT_INTERVAL, Interval};
pub use loader::load_from_args;
pub use model::WatchConfig;
