//! Error types for the Miru repository scanner

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur while scanning and publishing
#[derive(Error, Debug)]
pub enum ScanError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or parse JSON
    #[error("Failed to process JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Rendered output was not valid UTF-8
    #[error("Invalid UTF-8 in rendered output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// No `MiruExtension` block found in a source file
    #[error("No MiruExtension metadata block found")]
    NoMetadataBlock,

    /// Invalid path
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// An output artifact could not be written
    #[error("Failed to publish {}", .path.display())]
    Publish {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
