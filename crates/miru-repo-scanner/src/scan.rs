//! Extension source directory scanner

use crate::error::{ScanError, ScanResult};
use crate::parser::parse_extension;
use crate::types::ExtensionRecord;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Scan a directory of extension sources
///
/// Only the top level is read, in file name order. Files that cannot be read
/// or carry no metadata block are skipped with a warning. Invalid UTF-8 does
/// not skip a file.
///
/// # Errors
/// Returns an error if the directory is missing or cannot be listed
pub fn scan_extensions(dir: &Path) -> ScanResult<Vec<ExtensionRecord>> {
    if !dir.exists() {
        return Err(ScanError::InvalidPath(format!(
            "Extension directory does not exist: {}",
            dir.display()
        )));
    }

    if !dir.is_dir() {
        return Err(ScanError::InvalidPath(format!(
            "Extension path is not a directory: {}",
            dir.display()
        )));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(ScanError::Io)? {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("Failed to read entry in {}: {e}", dir.display()),
        }
    }
    entries.sort_by_key(fs::DirEntry::file_name);

    let mut extensions = Vec::new();
    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            debug!("Skipping directory {}", path.display());
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        // Sources are not required to be UTF-8; stray bytes are replaced.
        let content = match fs::read(&path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                warn!("Failed to read extension file {}: {e}", path.display());
                continue;
            }
        };

        match parse_extension(&file_name, &content) {
            Ok(record) => {
                let missing = record.missing_fields();
                if !missing.is_empty() {
                    warn!("{file_name} is missing metadata: {}", missing.join(", "));
                }
                debug!("Parsed {file_name} ({} fields)", record.len());
                extensions.push(record);
            }
            Err(e) => warn!("Skipping {}: {e}", path.display()),
        }
    }

    info!("Found {} extensions in {}", extensions.len(), dir.display());
    Ok(extensions)
}
