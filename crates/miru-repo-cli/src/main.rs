//! Miru repo CLI
//!
//! Builds the extension repository `index.json` and `README.md` listing.

mod logging;

use anyhow::Context;
use clap::Parser;
use miru_repo_scanner::config::{REPO_DIR, SOURCE_BASE_URL, TEST_RESULTS_FILE};
use miru_repo_scanner::{build_report, write_outputs, RepoConfig, Report};
use std::path::PathBuf;

use logging::{setup_tracing, VerbosityLevel};

#[derive(Parser)]
#[command(name = "miru-repo")]
#[command(about = "Miru extension repository index generator")]
#[command(version)]
struct Cli {
    /// Directory containing extension sources
    #[arg(long, value_name = "DIR", default_value = REPO_DIR)]
    repo_dir: PathBuf,

    /// Test results written by the extension test harness
    #[arg(long, value_name = "FILE", default_value = TEST_RESULTS_FILE)]
    test_results: PathBuf,

    /// Directory for index.json and README.md
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Base URL for extension source links
    #[arg(long, value_name = "URL", default_value = SOURCE_BASE_URL)]
    base_url: String,

    /// Use verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Do not print the run summary
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> RepoConfig {
        RepoConfig {
            repo_dir: self.repo_dir.clone(),
            test_results: self.test_results.clone(),
            output_dir: self.output_dir.clone(),
            source_base_url: self.base_url.clone(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    setup_tracing(VerbosityLevel::from_occurrences(cli.verbose));

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config();

    let report = build_report(&config).with_context(|| {
        format!("Failed to scan extensions in {}", config.repo_dir.display())
    })?;

    write_outputs(&report, &config).context("Failed to write repository index")?;

    if !cli.quiet {
        print_summary(&report, &config);
    }

    Ok(())
}

fn print_summary(report: &Report, config: &RepoConfig) {
    println!("Index complete!");
    println!("  Extensions indexed: {}", report.extensions.len());
    println!("  Extensions listed: {}", report.listed().count());
    println!("  Extensions hidden (nsfw): {}", report.hidden_count());
    println!(
        "  Tests: {} total, {} passed, {} failed",
        report.summary.total, report.summary.passed, report.summary.failed
    );
    println!("Wrote JSON index to: {}", config.index_path().display());
    println!("Wrote README listing to: {}", config.listing_path().display());
}
