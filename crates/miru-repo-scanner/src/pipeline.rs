//! End-to-end indexing run

use crate::config::RepoConfig;
use crate::error::ScanResult;
use crate::output::{to_json, to_markdown};
use crate::publish::{publish_all, Artifact};
use crate::report::Report;
use crate::results::load_test_results;
use crate::scan::scan_extensions;

/// Scan extensions and join them with test results
///
/// # Errors
/// Returns an error if the extension directory cannot be read
pub fn build_report(config: &RepoConfig) -> ScanResult<Report> {
    let extensions = scan_extensions(&config.repo_dir)?;
    let results = load_test_results(&config.test_results);
    Ok(Report::new(extensions, results))
}

/// Render the index and listing and publish them together
///
/// # Errors
/// Returns an error if rendering fails or either file cannot be written
pub fn write_outputs(report: &Report, config: &RepoConfig) -> ScanResult<()> {
    let index = to_json(&report.extensions)?;
    let listing = to_markdown(report, &config.source_base_url);

    publish_all(&[
        Artifact::new(config.index_path(), index),
        Artifact::new(config.listing_path(), listing),
    ])
}

/// Run the whole pipeline
///
/// # Errors
/// Returns an error on any fatal scan or publish failure
pub fn generate(config: &RepoConfig) -> ScanResult<Report> {
    let report = build_report(config)?;
    write_outputs(&report, config)?;
    Ok(report)
}
