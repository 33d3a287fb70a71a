//! Shared types for the Miru repository scanner

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Key that always carries the source file name
pub const URL_KEY: &str = "url";

/// Fields every listed extension is expected to declare
pub const PRIMARY_FIELDS: [&str; 3] = ["name", "package", "version"];

/// Metadata parsed from one extension source file
///
/// Keys are whatever the metadata block declared, plus `url`. Serialized as a
/// flat JSON object with keys in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionRecord(BTreeMap<String, String>);

impl ExtensionRecord {
    /// Build a record from parsed annotations and the source file name
    ///
    /// `url` is set last, so an annotation named `url` never survives.
    #[must_use]
    pub fn new(mut annotations: BTreeMap<String, String>, file_name: &str) -> Self {
        annotations.insert(URL_KEY.to_string(), file_name.to_string());
        Self(annotations)
    }

    /// Look up an annotation
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Source file name this record came from
    pub fn url(&self) -> &str {
        self.get(URL_KEY).unwrap_or_default()
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    pub fn package(&self) -> Option<&str> {
        self.get("package")
    }

    /// Whether the record is hidden from the listing
    ///
    /// Only the exact text `true` counts.
    pub fn is_nsfw(&self) -> bool {
        self.get("nsfw") == Some("true")
    }

    /// Primary fields the metadata block did not declare
    pub fn missing_fields(&self) -> Vec<&'static str> {
        PRIMARY_FIELDS
            .into_iter()
            .filter(|field| !self.0.contains_key(*field))
            .collect()
    }

    /// Iterate over all key/value pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Outcome reported by the extension test harness
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TestStatus {
    Pass,
    Fail,
    /// Any other text, including an absent status
    Unknown(String),
}

impl Default for TestStatus {
    fn default() -> Self {
        TestStatus::Unknown(String::new())
    }
}

impl From<String> for TestStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pass" => TestStatus::Pass,
            "fail" => TestStatus::Fail,
            _ => TestStatus::Unknown(s),
        }
    }
}

impl From<TestStatus> for String {
    fn from(status: TestStatus) -> Self {
        match status {
            TestStatus::Pass => "pass".to_string(),
            TestStatus::Fail => "fail".to_string(),
            TestStatus::Unknown(s) => s,
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Pass => write!(f, "pass"),
            TestStatus::Fail => write!(f, "fail"),
            TestStatus::Unknown(s) => write!(f, "{s}"),
        }
    }
}

/// Test result for one package
///
/// The harness writes more fields (timings, per-stage flags); only `status`
/// is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    #[serde(default)]
    pub status: TestStatus,
}

impl TestResult {
    #[must_use]
    pub fn new(status: TestStatus) -> Self {
        Self { status }
    }
}

/// Test results keyed by package identifier
pub type TestResults = HashMap<String, TestResult>;
