//! JSON index formatter

use crate::error::ScanResult;
use crate::types::ExtensionRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

/// Render all extensions as the repository index
///
/// Objects are indented by a single space, the layout clients of the
/// published `index.json` already consume.
///
/// # Errors
/// Returns an error if serialization fails
pub fn to_json(extensions: &[ExtensionRecord]) -> ScanResult<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    extensions.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(String::from_utf8(buf)?)
}
