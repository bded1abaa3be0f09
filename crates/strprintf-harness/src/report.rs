//! Conformance report generation.

use serde::{Deserialize, Serialize};

use crate::runner::VerificationResult;

/// Aggregated result of one verification campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub campaign: String,
    pub timestamp: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FailureRecord>,
}

/// One failed case, with enough context to reproduce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureRecord {
    pub case_name: String,
    pub expected: String,
    pub actual: String,
    pub expected_rc: i32,
    pub actual_rc: i32,
}

impl ConformanceReport {
    /// Build a report from runner results. `timestamp` is caller-supplied
    /// so report generation stays deterministic under test.
    pub fn from_results(
        campaign: impl Into<String>,
        timestamp: impl Into<String>,
        results: &[VerificationResult],
    ) -> Self {
        let failures: Vec<FailureRecord> = results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| FailureRecord {
                case_name: r.case_name.clone(),
                expected: r.expected.clone(),
                actual: r.actual.clone(),
                expected_rc: r.expected_rc,
                actual_rc: r.actual_rc,
            })
            .collect();
        Self {
            campaign: campaign.into(),
            timestamp: timestamp.into(),
            total: results.len(),
            passed: results.len() - failures.len(),
            failed: failures.len(),
            failures,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Render a human-readable markdown report.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str(&format!("# Conformance report: {}\n\n", self.campaign));
        md.push_str(&format!("Generated: {}\n\n", self.timestamp));
        md.push_str(&format!(
            "**{} / {} cases passed**\n\n",
            self.passed, self.total
        ));
        if self.failures.is_empty() {
            md.push_str("No failures.\n");
            return md;
        }
        md.push_str("| case | expected | actual | expected rc | actual rc |\n");
        md.push_str("|------|----------|--------|-------------|-----------|\n");
        for f in &self.failures {
            md.push_str(&format!(
                "| {} | `{}` | `{}` | {} | {} |\n",
                f.case_name, f.expected, f.actual, f.expected_rc, f.actual_rc
            ));
        }
        md
    }

    /// Machine-readable JSON form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool) -> VerificationResult {
        VerificationResult {
            case_name: name.into(),
            passed,
            expected: "e".into(),
            actual: if passed { "e".into() } else { "a".into() },
            expected_rc: 1,
            actual_rc: 1,
            diff: None,
        }
    }

    #[test]
    fn test_counts_and_markdown() {
        let results = vec![result("ok", true), result("bad", false)];
        let report = ConformanceReport::from_results("unit", "2026-08-30", &results);
        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 1);
        assert!(!report.all_passed());
        let md = report.to_markdown();
        assert!(md.contains("1 / 2 cases passed"));
        assert!(md.contains("| bad |"));
    }

    #[test]
    fn test_clean_report() {
        let results = vec![result("ok", true)];
        let report = ConformanceReport::from_results("unit", "t", &results);
        assert!(report.all_passed());
        assert!(report.to_markdown().contains("No failures."));
    }
}
