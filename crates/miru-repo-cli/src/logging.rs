//! Log output setup

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Default)]
pub enum VerbosityLevel {
    /// Warnings only: skipped files and missing test results.
    #[default]
    Default,

    /// Phase milestones. Corresponds to `-v`.
    Verbose,

    /// Per-file progress and lenient decoding notes. Corresponds to `-vv`.
    ExtraVerbose,

    /// Everything. Corresponds to `-vvv`.
    Trace,
}

impl VerbosityLevel {
    #[must_use]
    pub const fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Self::Default,
            1 => Self::Verbose,
            2 => Self::ExtraVerbose,
            _ => Self::Trace,
        }
    }

    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Default => LevelFilter::WARN,
            Self::Verbose => LevelFilter::INFO,
            Self::ExtraVerbose => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

/// Install the stderr subscriber; `RUST_LOG` refines the default level
pub fn setup_tracing(level: VerbosityLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.level_filter().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
