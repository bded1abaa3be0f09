//! Fixture execution engine.

use strprintf_core::{FnSink, FormatArg, str_printf, str_xprintf};

use crate::diff;
use crate::fixtures::{FixtureArg, FixtureCase, FixtureSet};

/// Result of replaying one fixture case.
#[derive(Debug, Clone)]
pub struct VerificationResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
    pub expected_rc: i32,
    pub actual_rc: i32,
    pub diff: Option<String>,
}

/// Runs a fixture set against the engine and collects results.
pub struct TestRunner {
    /// Name of the test campaign, carried into reports and logs.
    pub campaign: String,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all cases in a set and return per-case results.
    pub fn run(&self, set: &FixtureSet) -> Vec<VerificationResult> {
        set.cases.iter().map(|case| self.run_case(case)).collect()
    }

    fn run_case(&self, case: &FixtureCase) -> VerificationResult {
        let (actual, actual_rc) = execute_case(case);
        let passed = actual == case.expected_output && actual_rc == case.expected_rc;
        let diff = if passed {
            None
        } else {
            Some(diff::render_diff(&case.expected_output, &actual))
        };
        VerificationResult {
            case_name: case.name.clone(),
            passed,
            expected: case.expected_output.clone(),
            actual,
            expected_rc: case.expected_rc,
            actual_rc,
            diff,
        }
    }
}

/// Replay one case through the engine, returning (output, rc).
///
/// Bounded cases go through `str_printf` and report the buffer content up
/// to the terminator; unbounded cases collect through a forwarding sink.
pub fn execute_case(case: &FixtureCase) -> (String, i32) {
    let args: Vec<FormatArg> = case
        .args
        .iter()
        .map(|arg| match arg {
            FixtureArg::Char { char } => FormatArg::Char(*char as u8),
            FixtureArg::Int(v) => FormatArg::Int(*v),
            FixtureArg::Uint(v) => FormatArg::Uint(*v),
            FixtureArg::Text(s) => FormatArg::Str(s.as_bytes()),
        })
        .collect();
    let fmt = case.format.as_bytes();

    match case.buffer_len {
        Some(len) => {
            let mut buf = vec![0u8; len];
            let rc = str_printf(&mut buf, fmt, &args);
            let stored = buf.iter().position(|&b| b == 0).unwrap_or(0);
            (String::from_utf8_lossy(&buf[..stored]).into_owned(), rc)
        }
        None => {
            let mut out = Vec::new();
            let rc = str_xprintf(
                &mut FnSink(|ch: u8| {
                    out.push(ch);
                    1
                }),
                fmt,
                &args,
            );
            (String::from_utf8_lossy(&out).into_owned(), rc)
        }
    }
}
