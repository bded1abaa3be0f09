//! Fixture loading and management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::HarnessError;

/// One argument value in a fixture, JSON-friendly.
///
/// Numbers decode as signed first and fall back to unsigned only above
/// `i64::MAX`; single characters are spelled `{"char": "A"}` to keep them
/// distinct from one-character strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FixtureArg {
    Char { char: char },
    Int(i64),
    Uint(u64),
    Text(String),
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Format string handed to the engine.
    pub format: String,
    /// Arguments consumed left-to-right by the conversions.
    #[serde(default)]
    pub args: Vec<FixtureArg>,
    /// If set, render through the bounded-buffer entry point with a
    /// buffer of this many bytes; otherwise use an unbounded sink.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_len: Option<usize>,
    /// Exact expected output bytes (after truncation, excluding the
    /// terminator for bounded cases).
    pub expected_output: String,
    /// Expected return value of the entry point.
    pub expected_rc: i32,
}

/// A collection of fixture cases for one conversion family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Family name (e.g. "printf").
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load a fixture set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        if set.cases.is_empty() {
            return Err(HarnessError::EmptyFixture(path.to_path_buf()));
        }
        Ok(set)
    }

    /// Write the fixture set back to a file as pretty JSON.
    pub fn to_file(&self, path: &Path) -> Result<(), HarnessError> {
        let json = self.to_json()?;
        std::fs::write(path, json + "\n")?;
        Ok(())
    }
}
