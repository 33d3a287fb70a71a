//! Lenient parser for the test harness results file

use crate::types::{TestResult, TestResults};
use serde_json::Value;
use tracing::debug;

/// Parse a results document of the form `{"<package>": {"status": "..."}}`
///
/// Never fails. Invalid JSON or a non-object document yields an empty map.
/// Every key of an object document is kept; an entry that does not decode as
/// a result (a bare string, `null`, a non-string status) gets an unknown
/// status, so it still counts toward the total.
pub fn parse_test_results(content: &str) -> TestResults {
    let value: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            debug!("Ignoring malformed test results: {e}");
            return TestResults::new();
        }
    };

    let Value::Object(entries) = value else {
        debug!("Ignoring test results that are not a JSON object");
        return TestResults::new();
    };

    entries
        .into_iter()
        .map(
            |(package, entry)| match serde_json::from_value::<TestResult>(entry) {
                Ok(result) => (package, result),
                Err(e) => {
                    debug!("Unreadable test result for {package}: {e}");
                    (package, TestResult::default())
                }
            },
        )
        .collect()
}
