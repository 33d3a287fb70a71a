//! Miru repository scanner
//!
//! Reads `MiruExtension` metadata blocks from extension sources, joins them
//! with test harness results, and renders the repository `index.json` and
//! `README.md` listing.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::implicit_hasher
)]

pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod publish;
pub mod report;
pub mod results;
pub mod scan;
pub mod types;

pub use config::RepoConfig;
pub use error::{ScanError, ScanResult};
pub use pipeline::{build_report, generate, write_outputs};
pub use report::{Report, TestSummary};
pub use types::{ExtensionRecord, TestResult, TestResults, TestStatus};
