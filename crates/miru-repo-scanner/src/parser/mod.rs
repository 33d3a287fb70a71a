//! Parsers for extension sources and test results

pub mod metadata;
pub mod results;

pub use metadata::parse_extension;
pub use results::parse_test_results;
