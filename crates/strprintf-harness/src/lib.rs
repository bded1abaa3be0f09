//! Conformance testing harness for strprintf.
//!
//! This crate provides:
//! - Fixture sets: JSON-recorded format strings, arguments, and the exact
//!   output the legacy C renderer produced for them
//! - A runner that replays fixtures through the Rust engine and collects
//!   pass/fail results with diffs
//! - Report generation: human-readable markdown + machine-readable JSON
//! - A JSONL structured-log emitter for CI pipelines
//! - Console helpers: the cooked (`\n` to `\r\n`) consumer and the boot
//!   banner the original firmware printed

#![forbid(unsafe_code)]

pub mod console;
pub mod diff;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;

pub use error::HarnessError;
pub use fixtures::{FixtureArg, FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::{TestRunner, VerificationResult};
