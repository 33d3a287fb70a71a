//! Publishing of output artifacts
//!
//! Each artifact is written to a temporary file beside its destination and
//! synced. Destinations are only replaced once every artifact has been
//! staged, so a failed write leaves the previous outputs untouched. A replaced
//! file keeps its permissions; a new one is created world-readable.

use crate::error::{ScanError, ScanResult};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// One file to be written
#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub contents: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Write all artifacts, or none of them
///
/// # Errors
/// Returns [`ScanError::Publish`] naming the first artifact that could not be
/// staged or moved into place
pub fn publish_all(artifacts: &[Artifact]) -> ScanResult<()> {
    let mut staged = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let tmp = stage(&artifact.path, &artifact.contents).map_err(|source| {
            ScanError::Publish {
                path: artifact.path.clone(),
                source,
            }
        })?;
        debug!("Staged {}", artifact.path.display());
        staged.push((tmp, &artifact.path));
    }

    for (tmp, path) in staged {
        tmp.persist(path).map_err(|e| ScanError::Publish {
            path: path.clone(),
            source: e.error,
        })?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}

fn stage(path: &Path, contents: &str) -> std::io::Result<NamedTempFile> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    match fs::metadata(path) {
        Ok(existing) => tmp.as_file().set_permissions(existing.permissions())?,
        Err(_) => set_default_permissions(tmp.as_file())?,
    }
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}

#[cfg(unix)]
fn set_default_permissions(file: &File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt as _;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &File) -> std::io::Result<()> {
    Ok(())
}
