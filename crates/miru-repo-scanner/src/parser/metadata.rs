//! `MiruExtension` metadata block parser
//!
//! Extension sources declare their metadata in a comment block:
//!
//! ```text
//! // ==MiruExtension==
//! // @name         Example
//! // @version      v0.0.1
//! // @package      example.com
//! // ==/MiruExtension==
//! ```

use crate::error::{ScanError, ScanResult};
use crate::types::ExtensionRecord;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Prefix that marks an annotation line inside the block
pub const ANNOTATION_PREFIX: &str = "// @";

fn block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)MiruExtension(.+?)/MiruExtension").expect("metadata block regex")
    })
}

/// Find the first metadata block in a source file, delimiters included
pub fn extract_block(content: &str) -> Option<&str> {
    block_regex().find(content).map(|m| m.as_str())
}

/// Parse one annotation line into `(key, value)`
///
/// The value is the last whitespace-separated token, so `// @name Foo Bar`
/// yields `("name", "Bar")`. A line holding only a key yields the key as its
/// own value. A bare `// @` line yields nothing rather than an empty key with
/// an empty value.
pub fn parse_annotation(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix(ANNOTATION_PREFIX)?;
    let mut tokens = rest.split_whitespace();
    let key = tokens.next()?;
    let value = tokens.last().unwrap_or(key);
    Some((key, value.trim_end_matches('\r')))
}

/// Collect all annotations in a block; later keys overwrite earlier ones
pub fn parse_annotations(block: &str) -> BTreeMap<String, String> {
    block
        .lines()
        .filter_map(parse_annotation)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Parse an extension source file into a record
///
/// # Errors
/// Returns [`ScanError::NoMetadataBlock`] if the file has no metadata block
pub fn parse_extension(file_name: &str, content: &str) -> ScanResult<ExtensionRecord> {
    let block = extract_block(content).ok_or(ScanError::NoMetadataBlock)?;
    Ok(ExtensionRecord::new(parse_annotations(block), file_name))
}
