//! Default locations and the run configuration

use std::path::PathBuf;

/// Directory holding the extension sources
pub const REPO_DIR: &str = "repo";

/// Results written by the extension test harness
pub const TEST_RESULTS_FILE: &str = "lib/test.json";

/// File name of the structured index
pub const INDEX_FILE: &str = "index.json";

/// File name of the listing document
pub const LISTING_FILE: &str = "README.md";

/// Prefix for the per-extension source link
pub const SOURCE_BASE_URL: &str = "https://github.com/miru-project/repo/blob/main/repo/";

/// Paths and settings for one indexing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// Directory scanned for extension sources
    pub repo_dir: PathBuf,
    /// Optional test results mapping
    pub test_results: PathBuf,
    /// Directory that receives `index.json` and `README.md`
    pub output_dir: PathBuf,
    /// Base URL joined with each record's `url`
    pub source_base_url: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            repo_dir: PathBuf::from(REPO_DIR),
            test_results: PathBuf::from(TEST_RESULTS_FILE),
            output_dir: PathBuf::from("."),
            source_base_url: SOURCE_BASE_URL.to_string(),
        }
    }
}

impl RepoConfig {
    /// Where the structured index is written
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(INDEX_FILE)
    }

    /// Where the listing document is written
    #[must_use]
    pub fn listing_path(&self) -> PathBuf {
        self.output_dir.join(LISTING_FILE)
    }
}
