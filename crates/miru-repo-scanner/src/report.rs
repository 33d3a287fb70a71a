//! Joins extension metadata with test results

use crate::types::{ExtensionRecord, TestResults, TestStatus};
use serde::Serialize;

/// Indicator for a package with a passing test run
pub const PASS_INDICATOR: &str = "✅";

/// Indicator for a package with a failing test run
pub const FAIL_INDICATOR: &str = "❌";

/// Indicator when no usable result exists
pub const NO_RESULT_INDICATOR: &str = "--";

/// Aggregate counts over all test results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TestSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl TestSummary {
    /// Count results by status
    pub fn from_results(results: &TestResults) -> Self {
        results
            .values()
            .fold(Self::default(), |summary, result| match result.status {
                TestStatus::Pass => Self {
                    total: summary.total + 1,
                    passed: summary.passed + 1,
                    ..summary
                },
                TestStatus::Fail => Self {
                    total: summary.total + 1,
                    failed: summary.failed + 1,
                    ..summary
                },
                TestStatus::Unknown(_) => Self {
                    total: summary.total + 1,
                    ..summary
                },
            })
    }

    /// Results that neither passed nor failed
    pub fn other(&self) -> usize {
        self.total - self.passed - self.failed
    }
}

/// Test indicator for one extension
pub fn test_indicator(record: &ExtensionRecord, results: &TestResults) -> &'static str {
    let status = record
        .package()
        .and_then(|package| results.get(package))
        .map(|result| &result.status);

    match status {
        Some(TestStatus::Pass) => PASS_INDICATOR,
        Some(TestStatus::Fail) => FAIL_INDICATOR,
        _ => NO_RESULT_INDICATOR,
    }
}

/// Everything the output formatters need for one run
#[derive(Debug, Clone)]
pub struct Report {
    /// Every scanned extension, in scan order
    pub extensions: Vec<ExtensionRecord>,
    /// Results keyed by package
    pub results: TestResults,
    pub summary: TestSummary,
}

impl Report {
    #[must_use]
    pub fn new(extensions: Vec<ExtensionRecord>, results: TestResults) -> Self {
        let summary = TestSummary::from_results(&results);
        Self {
            extensions,
            results,
            summary,
        }
    }

    /// Extensions shown in the listing, in scan order
    pub fn listed(&self) -> impl Iterator<Item = &ExtensionRecord> {
        self.extensions.iter().filter(|ext| !ext.is_nsfw())
    }

    /// Number of extensions left out of the listing
    pub fn hidden_count(&self) -> usize {
        self.extensions.iter().filter(|ext| ext.is_nsfw()).count()
    }

    /// Indicator for one extension against this run's results
    pub fn indicator(&self, record: &ExtensionRecord) -> &'static str {
        test_indicator(record, &self.results)
    }
}
