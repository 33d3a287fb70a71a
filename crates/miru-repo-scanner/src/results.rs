//! Test results loader

use crate::parser::parse_test_results;
use crate::types::TestResults;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load the test harness results
///
/// A missing or unreadable file is not an error: a warning is logged and no
/// results are returned. Malformed contents are recovered as far as possible.
pub fn load_test_results(path: &Path) -> TestResults {
    let content = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            warn!("Test results not available at {}: {e}", path.display());
            return TestResults::new();
        }
    };

    let results = parse_test_results(&content);
    info!("Loaded {} test results from {}", results.len(), path.display());
    results
}
