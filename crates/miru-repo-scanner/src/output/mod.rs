//! Output formatters for the repository index and listing

pub mod json;
pub mod markdown;

pub use json::to_json;
pub use markdown::to_markdown;
